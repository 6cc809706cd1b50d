//! Test helpers and fixtures for store-backed tests
//!
//! # Examples
//!
//! ```rust,ignore
//! use recipes_server::features::shared::test_helpers::*;
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let store = memory_store();
//!     let cake = TestRecipe::new("Cake").with_ingredient("Flour", "200g").insert(&store).await;
//!     // ... test logic ...
//! }
//! ```

use std::sync::Arc;

use recipes_common::Recipe;

use crate::db::{MemoryRecipeStore, SharedStore};
use crate::features::recipes::mapping::to_new_record;
use crate::models::RecipeRecord;

/// Fresh empty in-memory store
pub fn memory_store() -> SharedStore {
    Arc::new(MemoryRecipeStore::new())
}

/// Builder for recipes inserted straight into a store
#[derive(Debug, Clone)]
pub struct TestRecipe {
    recipe: Recipe,
}

impl TestRecipe {
    /// A valid veg recipe serving 4
    pub fn new(name: &str) -> Self {
        Self {
            recipe: Recipe::new(name, "veg", Some(4), "Mix everything and cook"),
        }
    }

    pub fn with_type(mut self, dish_type: &str) -> Self {
        self.recipe.dish_type = dish_type.to_string();
        self
    }

    pub fn with_serving(mut self, serving_capacity: Option<i32>) -> Self {
        self.recipe.serving_capacity = serving_capacity;
        self
    }

    pub fn with_instruction(mut self, instruction: &str) -> Self {
        self.recipe.instruction = instruction.to_string();
        self
    }

    pub fn with_ingredient(mut self, name: &str, quantity: &str) -> Self {
        self.recipe = self.recipe.with_ingredient(name, quantity);
        self
    }

    pub fn build(self) -> Recipe {
        self.recipe
    }

    /// Persist the recipe, bypassing command validation
    #[allow(clippy::expect_used)]
    pub async fn insert(self, store: &SharedStore) -> RecipeRecord {
        store
            .save(to_new_record(&self.recipe))
            .await
            .expect("insert test recipe")
    }
}
