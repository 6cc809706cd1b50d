//! In-memory recipe store
//!
//! Keeps recipes in a `BTreeMap` behind a single `RwLock`, so iteration is in
//! id order and each operation sees a consistent snapshot. Ids come from
//! counters that only grow, so a deleted id is never handed out again.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::{DbError, DbResult, RecipeStore, SearchCriteria};
use crate::models::{IngredientRecord, NewIngredientRecord, NewRecipeRecord, RecipeRecord};

#[derive(Debug, Default)]
pub struct MemoryRecipeStore {
    state: RwLock<MemoryState>,
}

#[derive(Debug)]
struct MemoryState {
    recipes: BTreeMap<i32, RecipeRecord>,
    next_recipe_id: i32,
    next_ingredient_id: i32,
}

impl Default for MemoryState {
    fn default() -> Self {
        Self {
            recipes: BTreeMap::new(),
            next_recipe_id: 1,
            next_ingredient_id: 1,
        }
    }
}

impl MemoryState {
    fn build_ingredients(
        &mut self,
        recipe_id: i32,
        ingredients: Vec<NewIngredientRecord>,
    ) -> Vec<IngredientRecord> {
        ingredients
            .into_iter()
            .map(|ingredient| {
                let id = self.next_ingredient_id;
                self.next_ingredient_id += 1;
                IngredientRecord {
                    id,
                    name: ingredient.name,
                    quantity: ingredient.quantity,
                    recipe_id,
                }
            })
            .collect()
    }
}

impl MemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

}

#[cfg(test)]
impl MemoryRecipeStore {
    async fn len(&self) -> usize {
        self.state.read().await.recipes.len()
    }

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    async fn save(&self, recipe: NewRecipeRecord) -> DbResult<RecipeRecord> {
        let mut state = self.state.write().await;

        let id = state.next_recipe_id;
        state.next_recipe_id += 1;

        let ingredients = state.build_ingredients(id, recipe.ingredients);
        let record = RecipeRecord {
            id,
            name: recipe.name,
            dish_type: recipe.dish_type,
            creation_date: Utc::now(),
            serving_capacity: recipe.serving_capacity,
            instruction: recipe.instruction,
            ingredients,
        };

        state.recipes.insert(id, record.clone());
        Ok(record)
    }

    async fn replace(&self, id: i32, recipe: NewRecipeRecord) -> DbResult<RecipeRecord> {
        let mut state = self.state.write().await;

        let creation_date = match state.recipes.get(&id) {
            Some(existing) => existing.creation_date,
            None => return Err(DbError::not_found("Recipe", &id.to_string())),
        };

        let ingredients = state.build_ingredients(id, recipe.ingredients);
        let record = RecipeRecord {
            id,
            name: recipe.name,
            dish_type: recipe.dish_type,
            creation_date,
            serving_capacity: recipe.serving_capacity,
            instruction: recipe.instruction,
            ingredients,
        };

        state.recipes.insert(id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i32) -> DbResult<Option<RecipeRecord>> {
        Ok(self.state.read().await.recipes.get(&id).cloned())
    }

    async fn find_all(&self) -> DbResult<Vec<RecipeRecord>> {
        Ok(self.state.read().await.recipes.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i32) -> DbResult<()> {
        match self.state.write().await.recipes.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DbError::not_found("Recipe", &id.to_string())),
        }
    }

    async fn find_by_search_criteria(
        &self,
        criteria: &SearchCriteria,
    ) -> DbResult<Vec<RecipeRecord>> {
        let state = self.state.read().await;
        Ok(state
            .recipes
            .values()
            .filter(|record| criteria.matches(record))
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> DbResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn new_recipe(name: &str, ingredients: &[(&str, &str)]) -> NewRecipeRecord {
        NewRecipeRecord {
            name: name.to_string(),
            dish_type: "veg".to_string(),
            serving_capacity: Some(2),
            instruction: "Stir".to_string(),
            ingredients: ingredients
                .iter()
                .map(|(n, q)| NewIngredientRecord {
                    name: n.to_string(),
                    quantity: q.to_string(),
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_save_assigns_ids_and_wires_back_reference() {
        let store = MemoryRecipeStore::new();

        let first = store.save(new_recipe("Soup", &[("Leek", "2")])).await.unwrap();
        let second = store
            .save(new_recipe("Salad", &[("Lettuce", "1"), ("Oil", "1 tbsp")]))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.ingredients[0].recipe_id, 1);
        assert!(second.ingredients.iter().all(|i| i.recipe_id == 2));
        assert_eq!(second.ingredients[0].name, "Lettuce");
        assert_eq!(second.ingredients[1].name, "Oil");
        assert!(second.ingredients[0].id < second.ingredients[1].id);
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let store = MemoryRecipeStore::new();
        for name in ["A", "B", "C"] {
            store.save(new_recipe(name, &[])).await.unwrap();
        }

        let names: Vec<_> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_replace_keeps_creation_date_and_replaces_ingredients() {
        let store = MemoryRecipeStore::new();
        let saved = store
            .save(new_recipe("Cake", &[("Flour", "200g"), ("Egg", "2")]))
            .await
            .unwrap();
        let old_ids: Vec<_> = saved.ingredients.iter().map(|i| i.id).collect();

        let replaced = store
            .replace(saved.id, new_recipe("Better Cake", &[("Sugar", "50g")]))
            .await
            .unwrap();

        assert_eq!(replaced.id, saved.id);
        assert_eq!(replaced.creation_date, saved.creation_date);
        assert_eq!(replaced.name, "Better Cake");
        assert_eq!(replaced.ingredients.len(), 1);
        assert_eq!(replaced.ingredients[0].name, "Sugar");
        assert!(!old_ids.contains(&replaced.ingredients[0].id));

        let stored = store.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(stored, replaced);
    }

    #[tokio::test]
    async fn test_replace_missing_recipe_writes_nothing() {
        let store = MemoryRecipeStore::new();
        store.save(new_recipe("Cake", &[])).await.unwrap();

        let result = store.replace(99, new_recipe("Ghost", &[])).await;

        assert!(matches!(result, Err(DbError::NotFound(_))));
        assert_eq!(store.len().await, 1);
        assert!(store.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let store = MemoryRecipeStore::new();
        let saved = store.save(new_recipe("Cake", &[("Flour", "1")])).await.unwrap();

        store.delete_by_id(saved.id).await.unwrap();
        assert!(store.is_empty().await);

        let again = store.delete_by_id(saved.id).await;
        assert!(matches!(again, Err(DbError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_deleted_id_is_not_reused() {
        let store = MemoryRecipeStore::new();
        let first = store.save(new_recipe("A", &[])).await.unwrap();
        store.delete_by_id(first.id).await.unwrap();

        let second = store.save(new_recipe("B", &[])).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_find_by_search_criteria() {
        let store = MemoryRecipeStore::new();
        let mut a = new_recipe("A", &[]);
        a.serving_capacity = Some(4);
        let b = new_recipe("B", &[]);
        store.save(a).await.unwrap();
        store.save(b).await.unwrap();

        let criteria = SearchCriteria {
            dish_type: Some("veg".to_string()),
            serving_capacity: Some(4),
            instruction_fragment: None,
        };
        let found = store.find_by_search_criteria(&criteria).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "A");
    }
}
