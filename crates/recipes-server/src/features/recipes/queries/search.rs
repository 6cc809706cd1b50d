//! Filtered recipe search
//!
//! The scalar criteria (`dishType`, `numberOfServing`, `instructionSearch`)
//! are pushed down to the store. Ingredient membership is then checked here,
//! case-insensitively, on the records the store returned.

use mediator::Request;
use recipes_common::Recipe;
use serde::{Deserialize, Serialize};

use crate::db::{DbError, SearchCriteria, SharedStore};
use crate::features::recipes::mapping::to_recipes;
use crate::features::shared::validation::is_blank;

/// Search parameters, deserialized straight from the query string
///
/// `GET /api/search/recipe?dishType=veg&numberOfServing=4&ingredient=flour&ingredientIncluded=false&instructionSearch=oven`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecipesQuery {
    #[serde(default)]
    pub dish_type: Option<String>,

    #[serde(default)]
    pub number_of_serving: Option<i32>,

    /// Ingredient name to look for; absent or blank disables ingredient filtering
    #[serde(default)]
    pub ingredient: Option<String>,

    /// Keep recipes that contain `ingredient` (true) or that lack it (false)
    #[serde(default = "default_ingredient_included")]
    pub ingredient_included: bool,

    /// Case-sensitive fragment of the instruction text
    #[serde(default)]
    pub instruction_search: Option<String>,
}

fn default_ingredient_included() -> bool {
    true
}

impl Default for SearchRecipesQuery {
    fn default() -> Self {
        Self {
            dish_type: None,
            number_of_serving: None,
            ingredient: None,
            ingredient_included: default_ingredient_included(),
            instruction_search: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SearchRecipesError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

impl Request<Result<Vec<Recipe>, SearchRecipesError>> for SearchRecipesQuery {}

impl crate::cqrs::middleware::Query for SearchRecipesQuery {}

impl SearchRecipesQuery {
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            dish_type: self.dish_type.clone(),
            serving_capacity: self.number_of_serving,
            instruction_fragment: self.instruction_search.clone(),
        }
    }

    /// The ingredient name to filter on, if any
    pub fn ingredient_filter(&self) -> Option<&str> {
        self.ingredient.as_deref().filter(|name| !is_blank(name))
    }
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: SharedStore,
    query: SearchRecipesQuery,
) -> Result<Vec<Recipe>, SearchRecipesError> {
    let mut records = store.find_by_search_criteria(&query.criteria()).await?;
    let matched_criteria = records.len();

    if let Some(name) = query.ingredient_filter() {
        records.retain(|record| record.has_ingredient(name) == query.ingredient_included);
    }

    tracing::debug!(
        matched_criteria,
        returned = records.len(),
        "Recipe search completed"
    );

    Ok(to_recipes(records))
}
