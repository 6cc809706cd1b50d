use mediator::Request;
use recipes_common::Recipe;
use serde::{Deserialize, Serialize};

use crate::db::{DbError, SharedStore};
use crate::features::recipes::mapping::to_recipes;

/// Every stored recipe, ordered by id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListRecipesQuery;

#[derive(Debug, thiserror::Error)]
pub enum ListRecipesError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

impl Request<Result<Vec<Recipe>, ListRecipesError>> for ListRecipesQuery {}

impl crate::cqrs::middleware::Query for ListRecipesQuery {}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: SharedStore,
    _query: ListRecipesQuery,
) -> Result<Vec<Recipe>, ListRecipesError> {
    let records = store.find_all().await?;

    tracing::debug!(count = records.len(), "Recipes listed");
    Ok(to_recipes(records))
}
