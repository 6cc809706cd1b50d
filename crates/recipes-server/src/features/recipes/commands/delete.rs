use mediator::Request;
use serde::{Deserialize, Serialize};

use crate::db::{DbError, SharedStore};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRecipeCommand {
    pub id: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteRecipeError {
    #[error("Recipe {0} not found")]
    NotFound(i32),
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

impl Request<Result<(), DeleteRecipeError>> for DeleteRecipeCommand {}

impl crate::cqrs::middleware::Command for DeleteRecipeCommand {}

/// Deletes the recipe and, by cascade, its ingredients
///
/// Only a missing row is reported as `NotFound`; any other store failure
/// surfaces as `Database`.
#[tracing::instrument(skip(store))]
pub async fn handle(store: SharedStore, command: DeleteRecipeCommand) -> Result<(), DeleteRecipeError> {
    store.delete_by_id(command.id).await.map_err(|e| match e {
        DbError::NotFound(_) => DeleteRecipeError::NotFound(command.id),
        other => DeleteRecipeError::Database(other),
    })?;

    tracing::info!(recipe_id = command.id, "Recipe deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{memory_store, TestRecipe};

    #[tokio::test]
    async fn test_handle_deletes_recipe() {
        let store = memory_store();
        let saved = TestRecipe::new("Cake")
            .with_ingredient("Flour", "200g")
            .insert(&store)
            .await;

        handle(store.clone(), DeleteRecipeCommand { id: saved.id })
            .await
            .unwrap();

        assert!(store.find_by_id(saved.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_handle_not_found() {
        let store = memory_store();

        let result = handle(store, DeleteRecipeCommand { id: 999 }).await;

        assert!(matches!(result, Err(DeleteRecipeError::NotFound(999))));
    }

    #[tokio::test]
    async fn test_handle_twice_reports_not_found() {
        let store = memory_store();
        let saved = TestRecipe::new("Cake").insert(&store).await;

        handle(store.clone(), DeleteRecipeCommand { id: saved.id })
            .await
            .unwrap();
        let again = handle(store, DeleteRecipeCommand { id: saved.id }).await;

        assert!(matches!(again, Err(DeleteRecipeError::NotFound(_))));
    }
}
