//! Recipes Server Library
//!
//! HTTP service for a recipe catalog: recipes with a name, a dish type, a
//! serving capacity, instructions and an ordered list of ingredients.
//!
//! # Architecture
//!
//! The server follows a **CQRS (Command Query Responsibility Segregation)** layout:
//!
//! - **Commands** (create, update, delete) validate input and write through the store
//! - **Queries** (get, list, search) read through the store and map records to the wire model
//!
//! Requests flow HTTP route -> command/query handler -> mapping -> [`db::RecipeStore`].
//! The store is either PostgreSQL (`sqlx`) or an in-memory map, chosen by
//! `RECIPES_STORE_BACKEND`.
//!
//! ## Framework Stack
//!
//! - **Axum**: HTTP routing and extractors
//! - **SQLx**: PostgreSQL access and migrations
//! - **Tower**: Middleware (CORS, tracing, compression)
//!
//! # Example
//!
//! ```no_run
//! use recipes_server::{api, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     api::serve(config).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod cqrs;
pub mod db;
pub mod error;
pub mod features;
pub mod middleware;
pub mod models;

// Re-export commonly used types
pub use error::AppError;
