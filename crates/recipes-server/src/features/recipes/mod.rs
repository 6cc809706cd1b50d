//! Recipe catalog feature
//!
//! - `commands/` - create, update, delete
//! - `queries/` - get, list, search
//! - `mapping.rs` - wire model <-> persisted model
//! - `routes.rs` - HTTP handlers

pub mod commands;
pub mod mapping;
pub mod queries;
pub mod routes;

pub use commands::{
    CreateRecipeCommand, CreateRecipeError, DeleteRecipeCommand, DeleteRecipeError,
    UpdateRecipeCommand, UpdateRecipeError,
};

pub use queries::{
    GetRecipeError, GetRecipeQuery, ListRecipesError, ListRecipesQuery, SearchRecipesError,
    SearchRecipesQuery,
};

pub use routes::recipes_routes;
