//! Create recipe command
//!
//! Validates the incoming recipe, maps it to a new record and lets the store
//! assign the recipe and ingredient ids.

use mediator::Request;
use recipes_common::Recipe;
use serde::{Deserialize, Serialize};

use super::validate_recipe;
use crate::db::{DbError, SharedStore};
use crate::features::recipes::mapping::to_new_record;
use crate::features::shared::ValidationErrors;

/// Command to create a new recipe
///
/// Any `id` on the recipe or its ingredients is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecipeCommand {
    pub recipe: Recipe,
}

/// Errors that can occur when creating a recipe
#[derive(Debug, thiserror::Error)]
pub enum CreateRecipeError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

impl Request<Result<i32, CreateRecipeError>> for CreateRecipeCommand {}

impl crate::cqrs::middleware::Command for CreateRecipeCommand {}

impl CreateRecipeCommand {
    pub fn new(recipe: Recipe) -> Self {
        Self { recipe }
    }

    pub fn validate(&self) -> Result<(), CreateRecipeError> {
        validate_recipe(&self.recipe)?;
        Ok(())
    }
}

/// Handler function for creating recipes
///
/// # Returns
///
/// The id assigned to the new recipe
///
/// # Errors
///
/// - `Validation` if `name`, `type` or `instruction` is blank
/// - `Database` if the store fails
#[tracing::instrument(
    skip(store, command),
    fields(name = %command.recipe.name, dish_type = %command.recipe.dish_type)
)]
pub async fn handle(store: SharedStore, command: CreateRecipeCommand) -> Result<i32, CreateRecipeError> {
    command.validate()?;

    let record = store.save(to_new_record(&command.recipe)).await?;

    tracing::info!(
        recipe_id = record.id,
        ingredients = record.ingredients.len(),
        "Recipe created"
    );

    Ok(record.id)
}
