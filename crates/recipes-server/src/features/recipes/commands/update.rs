//! Update recipe command
//!
//! Replaces every scalar field of an existing recipe and its whole ingredient
//! list. Old ingredients are discarded, not merged; the new ones get fresh ids.

use mediator::Request;
use recipes_common::Recipe;
use serde::{Deserialize, Serialize};

use super::validate_recipe;
use crate::db::{DbError, SharedStore};
use crate::features::recipes::mapping::to_new_record;
use crate::features::shared::ValidationErrors;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRecipeCommand {
    pub recipe: Recipe,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateRecipeError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// `None` when the request carried no id at all
    #[error("Recipe not found: {0:?}")]
    NotFound(Option<i32>),

    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

impl Request<Result<Recipe, UpdateRecipeError>> for UpdateRecipeCommand {}

impl crate::cqrs::middleware::Command for UpdateRecipeCommand {}

impl UpdateRecipeCommand {
    pub fn new(recipe: Recipe) -> Self {
        Self { recipe }
    }

    pub fn validate(&self) -> Result<(), UpdateRecipeError> {
        validate_recipe(&self.recipe)?;
        Ok(())
    }
}

/// Handler function for updating recipes
///
/// # Returns
///
/// The recipe as persisted after the update
///
/// # Errors
///
/// - `Validation` if `name`, `type` or `instruction` is blank
/// - `NotFound` if the recipe has no id or no recipe has that id; nothing is written
/// - `Database` if the store fails
#[tracing::instrument(skip(store, command), fields(recipe_id = ?command.recipe.id))]
pub async fn handle(
    store: SharedStore,
    command: UpdateRecipeCommand,
) -> Result<Recipe, UpdateRecipeError> {
    command.validate()?;

    let id = command.recipe.id.ok_or(UpdateRecipeError::NotFound(None))?;

    let record = store
        .replace(id, to_new_record(&command.recipe))
        .await
        .map_err(|e| match e {
            DbError::NotFound(_) => UpdateRecipeError::NotFound(Some(id)),
            other => UpdateRecipeError::Database(other),
        })?;

    tracing::info!(recipe_id = id, "Recipe updated");

    Ok(Recipe::from(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{memory_store, TestRecipe};

    #[tokio::test]
    async fn test_handle_replaces_fields_and_ingredients() {
        let store = memory_store();
        let saved = TestRecipe::new("Cake")
            .with_ingredient("Flour", "200g")
            .with_ingredient("Egg", "2")
            .insert(&store)
            .await;
        let old_ingredient_ids: Vec<_> = saved.ingredients.iter().map(|i| i.id).collect();

        let update = Recipe::new("Sponge Cake", "dessert", Some(8), "Whisk and bake")
            .with_id(saved.id)
            .with_ingredient("Butter", "100g");

        let updated = handle(store.clone(), UpdateRecipeCommand::new(update)).await.unwrap();

        assert_eq!(updated.id, Some(saved.id));
        assert_eq!(updated.name, "Sponge Cake");
        assert_eq!(updated.dish_type, "dessert");
        assert_eq!(updated.serving_capacity, Some(8));
        assert_eq!(updated.ingredient_list.len(), 1);
        assert_eq!(updated.ingredient_list[0].name, "Butter");
        let new_id = updated.ingredient_list[0].id.unwrap();
        assert!(!old_ingredient_ids.contains(&new_id));

        let stored = store.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(stored.creation_date, saved.creation_date);
    }

    #[tokio::test]
    async fn test_handle_unknown_id_is_not_found_and_writes_nothing() {
        let store = memory_store();
        let existing = TestRecipe::new("Cake").insert(&store).await;

        let update = Recipe::new("Ghost", "veg", None, "Haunt").with_id(existing.id + 100);
        let result = handle(store.clone(), UpdateRecipeCommand::new(update)).await;

        assert!(matches!(result, Err(UpdateRecipeError::NotFound(Some(_)))));
        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], existing);
    }

    #[tokio::test]
    async fn test_handle_missing_id_is_not_found() {
        let store = memory_store();
        let update = Recipe::new("Cake", "veg", None, "Bake");

        let result = handle(store, UpdateRecipeCommand::new(update)).await;

        assert!(matches!(result, Err(UpdateRecipeError::NotFound(None))));
    }

    #[tokio::test]
    async fn test_handle_validates_before_lookup() {
        let store = memory_store();
        let update = Recipe::new("Cake", "", None, "Bake").with_id(1);

        let result = handle(store, UpdateRecipeCommand::new(update)).await;

        assert!(matches!(result, Err(UpdateRecipeError::Validation(_))));
    }
}
