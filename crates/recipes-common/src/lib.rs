//! Recipes Common Library
//!
//! Shared pieces of the recipe catalog workspace:
//!
//! - **Types**: the JSON wire model (`Recipe`, `Ingredient`)
//! - **Logging**: tracing subscriber setup used by every binary

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod logging;
pub mod types;

pub use types::{Ingredient, Recipe};
