use mediator::Request;
use recipes_common::Recipe;
use serde::{Deserialize, Serialize};

use crate::db::{DbError, SharedStore};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetRecipeQuery {
    pub id: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum GetRecipeError {
    #[error("Recipe {0} not found")]
    NotFound(i32),
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

impl Request<Result<Recipe, GetRecipeError>> for GetRecipeQuery {}

impl crate::cqrs::middleware::Query for GetRecipeQuery {}

#[tracing::instrument(skip(store))]
pub async fn handle(store: SharedStore, query: GetRecipeQuery) -> Result<Recipe, GetRecipeError> {
    let record = store
        .find_by_id(query.id)
        .await?
        .ok_or(GetRecipeError::NotFound(query.id))?;

    tracing::debug!(recipe_id = record.id, "Recipe loaded");
    Ok(Recipe::from(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{memory_store, TestRecipe};

    #[tokio::test]
    async fn test_handle_returns_recipe_with_ingredients() {
        let store = memory_store();
        let saved = TestRecipe::new("Cake")
            .with_serving(Some(5))
            .with_ingredient("Flour", "200g")
            .insert(&store)
            .await;

        let recipe = handle(store, GetRecipeQuery { id: saved.id }).await.unwrap();

        assert_eq!(recipe.id, Some(saved.id));
        assert_eq!(recipe.name, "Cake");
        assert_eq!(recipe.serving_capacity, Some(5));
        assert_eq!(recipe.ingredient_list.len(), 1);
        assert_eq!(recipe.ingredient_list[0].name, "Flour");
        assert_eq!(recipe.ingredient_list[0].quantity, "200g");
    }

    #[tokio::test]
    async fn test_handle_not_found() {
        let store = memory_store();

        let result = handle(store, GetRecipeQuery { id: 42 }).await;

        assert!(matches!(result, Err(GetRecipeError::NotFound(42))));
    }
}
