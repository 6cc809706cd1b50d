//! Feature modules implementing the recipe API
//!
//! Each feature is a vertical slice following the CQRS (Command Query
//! Responsibility Segregation) pattern:
//! - `commands/` - Write operations (create, update, delete)
//! - `queries/` - Read operations (get, list, search)
//! - `routes.rs` - HTTP route definitions
//!
//! Commands and queries implement the mediator pattern using the `mediator` crate.

pub mod recipes;
pub mod shared;

use axum::Router;

use crate::db::SharedStore;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    /// Recipe store, PostgreSQL or in-memory
    pub store: SharedStore,
}

/// Creates the API router with all feature routes mounted
///
/// The result is meant to be nested under `/api`.
pub fn router(state: FeatureState) -> Router<()> {
    Router::new().merge(recipes::recipes_routes().with_state(state.store))
}
