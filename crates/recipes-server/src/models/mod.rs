//! Database models
//!
//! Persisted shapes of the `recipe` and `ingredient` tables. The wire model
//! lives in `recipes_common::types`; conversion between the two is done in
//! `features::recipes::mapping`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Recipe row with its ingredients attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct RecipeRecord {
    pub id: i32,
    pub name: String,
    #[sqlx(rename = "type")]
    pub dish_type: String,
    /// Set once on first insert and never updated
    pub creation_date: DateTime<Utc>,
    pub serving_capacity: Option<i32>,
    pub instruction: String,

    /// Loaded with a second query, ordered by ingredient id
    #[sqlx(skip)]
    #[serde(default)]
    pub ingredients: Vec<IngredientRecord>,
}

/// Ingredient row; `recipe_id` refers back to the owning recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct IngredientRecord {
    pub id: i32,
    pub name: String,
    pub quantity: String,
    pub recipe_id: i32,
}

/// Recipe contents to be written by a store
///
/// Carries no ids: the recipe id is assigned on insert (or taken from the
/// replaced row) and each ingredient's `recipe_id` is wired by the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewRecipeRecord {
    pub name: String,
    pub dish_type: String,
    pub serving_capacity: Option<i32>,
    pub instruction: String,
    pub ingredients: Vec<NewIngredientRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewIngredientRecord {
    pub name: String,
    pub quantity: String,
}

impl RecipeRecord {
    /// Ingredient names of this recipe, in stored order
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.name.as_str())
    }

    /// Whether any ingredient is named `name`, ignoring case
    pub fn has_ingredient(&self, name: &str) -> bool {
        let wanted = name.to_lowercase();
        self.ingredient_names().any(|n| n.to_lowercase() == wanted)
    }
}
