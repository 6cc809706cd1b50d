//! Conversion between the wire model and the persisted model
//!
//! Both directions are plain data transforms. Ingredient order is preserved.
//! The creation date and the ingredient back-reference never leave the
//! server, and the back-reference is not set here: the store wires it once
//! the recipe row has an id.

use recipes_common::{Ingredient, Recipe};

use crate::models::{IngredientRecord, NewIngredientRecord, NewRecipeRecord, RecipeRecord};

impl From<RecipeRecord> for Recipe {
    fn from(record: RecipeRecord) -> Self {
        Recipe {
            id: Some(record.id),
            name: record.name,
            dish_type: record.dish_type,
            serving_capacity: record.serving_capacity,
            ingredient_list: record.ingredients.into_iter().map(Ingredient::from).collect(),
            instruction: record.instruction,
        }
    }
}

impl From<IngredientRecord> for Ingredient {
    fn from(record: IngredientRecord) -> Self {
        Ingredient {
            id: Some(record.id),
            name: record.name,
            quantity: record.quantity,
        }
    }
}

/// Build the contents a store writes for `recipe`, ignoring any client ids
pub fn to_new_record(recipe: &Recipe) -> NewRecipeRecord {
    NewRecipeRecord {
        name: recipe.name.clone(),
        dish_type: recipe.dish_type.clone(),
        serving_capacity: recipe.serving_capacity,
        instruction: recipe.instruction.clone(),
        ingredients: recipe
            .ingredient_list
            .iter()
            .map(|ingredient| NewIngredientRecord {
                name: ingredient.name.clone(),
                quantity: ingredient.quantity.clone(),
            })
            .collect(),
    }
}

/// Map records in order
pub fn to_recipes(records: Vec<RecipeRecord>) -> Vec<Recipe> {
    records.into_iter().map(Recipe::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_record_to_recipe_keeps_ingredient_order() {
        let record = RecipeRecord {
            id: 7,
            name: "Pancakes".to_string(),
            dish_type: "veg".to_string(),
            creation_date: Utc::now(),
            serving_capacity: None,
            instruction: "Whisk and fry".to_string(),
            ingredients: vec![
                IngredientRecord {
                    id: 11,
                    name: "Milk".to_string(),
                    quantity: "300ml".to_string(),
                    recipe_id: 7,
                },
                IngredientRecord {
                    id: 12,
                    name: "Egg".to_string(),
                    quantity: "2".to_string(),
                    recipe_id: 7,
                },
            ],
        };

        let recipe = Recipe::from(record);

        assert_eq!(recipe.id, Some(7));
        assert_eq!(recipe.name, "Pancakes");
        assert_eq!(recipe.serving_capacity, None);
        assert_eq!(
            recipe.ingredient_list,
            vec![
                Ingredient {
                    id: Some(11),
                    name: "Milk".to_string(),
                    quantity: "300ml".to_string()
                },
                Ingredient {
                    id: Some(12),
                    name: "Egg".to_string(),
                    quantity: "2".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_to_new_record_drops_client_ids() {
        let mut recipe = Recipe::new("Soup", "veg", Some(2), "Simmer")
            .with_id(3)
            .with_ingredient("Leek", "1")
            .with_ingredient("Potato", "2");
        recipe.ingredient_list[0].id = Some(99);

        let record = to_new_record(&recipe);

        assert_eq!(record.name, "Soup");
        assert_eq!(record.dish_type, "veg");
        assert_eq!(record.serving_capacity, Some(2));
        assert_eq!(record.instruction, "Simmer");
        assert_eq!(
            record.ingredients,
            vec![
                NewIngredientRecord {
                    name: "Leek".to_string(),
                    quantity: "1".to_string()
                },
                NewIngredientRecord {
                    name: "Potato".to_string(),
                    quantity: "2".to_string()
                },
            ]
        );
    }
}
