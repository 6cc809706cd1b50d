//! The recipe store contract

use async_trait::async_trait;
use std::sync::Arc;

use super::DbResult;
use crate::models::{NewRecipeRecord, RecipeRecord};

/// Store handle shared by the router and the mediator
pub type SharedStore = Arc<dyn RecipeStore>;

/// Persistence of recipes together with their ingredients
///
/// Every write is atomic for one recipe: the recipe row is written first and
/// its ingredient rows are then replaced as a whole. Records returned by any
/// method carry their ingredients ordered by ingredient id.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Insert a recipe with its ingredients and return it with assigned ids
    async fn save(&self, recipe: NewRecipeRecord) -> DbResult<RecipeRecord>;

    /// Overwrite the scalars of recipe `id` and replace all of its ingredients
    ///
    /// The creation date is kept. Fails with `DbError::NotFound` when no
    /// recipe has this id, in which case nothing is written.
    async fn replace(&self, id: i32, recipe: NewRecipeRecord) -> DbResult<RecipeRecord>;

    async fn find_by_id(&self, id: i32) -> DbResult<Option<RecipeRecord>>;

    /// All recipes ordered by id
    async fn find_all(&self) -> DbResult<Vec<RecipeRecord>>;

    /// Delete a recipe and, by cascade, its ingredients
    ///
    /// Fails with `DbError::NotFound` when no recipe has this id.
    async fn delete_by_id(&self, id: i32) -> DbResult<()>;

    /// Recipes matching every present criterion, ordered by id
    async fn find_by_search_criteria(&self, criteria: &SearchCriteria)
        -> DbResult<Vec<RecipeRecord>>;

    /// Check that the backend is reachable
    async fn health_check(&self) -> DbResult<()>;
}

/// Scalar filters applied by the store
///
/// An absent criterion matches anything. `dish_type` and `serving_capacity`
/// require equality; `instruction_fragment` is a case-sensitive literal
/// substring of the instruction text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub dish_type: Option<String>,
    pub serving_capacity: Option<i32>,
    pub instruction_fragment: Option<String>,
}

impl SearchCriteria {
    pub fn matches(&self, record: &RecipeRecord) -> bool {
        let type_ok = self
            .dish_type
            .as_deref()
            .map_or(true, |t| record.dish_type == t);
        let serving_ok = self
            .serving_capacity
            .map_or(true, |s| record.serving_capacity == Some(s));
        let text_ok = self
            .instruction_fragment
            .as_deref()
            .map_or(true, |f| record.instruction.contains(f));

        type_ok && serving_ok && text_ok
    }
}
