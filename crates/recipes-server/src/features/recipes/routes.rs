//! Recipe API routes
//!
//! Wires the recipe commands and queries to Axum handlers.
//!
//! # Route Structure
//!
//! - `POST /api/recipe` - Create a recipe, responds with its id
//! - `PUT /api/recipe` - Replace a recipe identified by the body's `id`
//! - `GET /api/recipe/:id` - Get a single recipe
//! - `DELETE /api/recipe/:id` - Delete a recipe and its ingredients
//! - `GET /api/recipes` - List all recipes
//! - `GET /api/search/recipe` - Filtered search
//!
//! Extractors are taken as `Result<_, Rejection>` so that malformed bodies,
//! ids and query strings produce the same JSON error body as everything else.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use recipes_common::Recipe;

use super::{
    commands::{
        CreateRecipeCommand, CreateRecipeError, DeleteRecipeCommand, DeleteRecipeError,
        UpdateRecipeCommand, UpdateRecipeError,
    },
    queries::{
        GetRecipeError, GetRecipeQuery, ListRecipesError, ListRecipesQuery, SearchRecipesError,
        SearchRecipesQuery,
    },
};
use crate::db::SharedStore;
use crate::error::AppError;

/// Plain-text body returned by a successful delete
pub const DELETE_CONFIRMATION: &str = "Requested recipe deleted from DB";

// ============================================================================
// Router Configuration
// ============================================================================

/// Creates the recipes router; nest it under `/api`
pub fn recipes_routes() -> Router<SharedStore> {
    Router::new()
        .route("/recipe", post(create_recipe).put(update_recipe))
        .route("/recipe/:id", get(get_recipe).delete(delete_recipe))
        .route("/recipes", get(list_recipes))
        .route("/search/recipe", get(search_recipes))
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// `POST /api/recipe`
///
/// - `201 Created` with the new id as a bare JSON integer
/// - `400 Bad Request` on a blank required field or malformed JSON
async fn create_recipe(
    State(store): State<SharedStore>,
    payload: Result<Json<Recipe>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(recipe) = payload?;

    let id = super::commands::create::handle(store, CreateRecipeCommand::new(recipe)).await?;

    tracing::info!(recipe_id = id, "Recipe created via API");

    Ok((StatusCode::CREATED, Json(id)).into_response())
}

/// `PUT /api/recipe`
///
/// - `200 OK` with the recipe as persisted
/// - `400 Bad Request` on a blank required field or malformed JSON
/// - `404 Not Found` when the body has no `id` or the id does not exist
async fn update_recipe(
    State(store): State<SharedStore>,
    payload: Result<Json<Recipe>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(recipe) = payload?;

    let updated = super::commands::update::handle(store, UpdateRecipeCommand::new(recipe)).await?;

    tracing::info!(recipe_id = ?updated.id, "Recipe updated via API");

    Ok((StatusCode::OK, Json(updated)).into_response())
}

/// `DELETE /api/recipe/:id`
///
/// - `200 OK` with a plain-text confirmation
/// - `404 Not Found` when no recipe has this id
async fn delete_recipe(
    State(store): State<SharedStore>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;

    super::commands::delete::handle(store, DeleteRecipeCommand { id }).await?;

    tracing::info!(recipe_id = id, "Recipe deleted via API");

    Ok((StatusCode::OK, DELETE_CONFIRMATION).into_response())
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

/// `GET /api/recipe/:id`
async fn get_recipe(
    State(store): State<SharedStore>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;

    let recipe = super::queries::get::handle(store, GetRecipeQuery { id }).await?;

    Ok((StatusCode::OK, Json(recipe)).into_response())
}

/// `GET /api/recipes`
async fn list_recipes(State(store): State<SharedStore>) -> Result<Response, AppError> {
    let recipes = super::queries::list::handle(store, ListRecipesQuery).await?;

    Ok((StatusCode::OK, Json(recipes)).into_response())
}

/// `GET /api/search/recipe?dishType=&numberOfServing=&ingredient=&ingredientIncluded=&instructionSearch=`
async fn search_recipes(
    State(store): State<SharedStore>,
    query: Result<Query<SearchRecipesQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;

    let recipes = super::queries::search::handle(store, query).await?;

    tracing::debug!(count = recipes.len(), "Recipe search via API");

    Ok((StatusCode::OK, Json(recipes)).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

impl From<CreateRecipeError> for AppError {
    fn from(err: CreateRecipeError) -> Self {
        match err {
            CreateRecipeError::Validation(errors) => AppError::Validation(errors),
            CreateRecipeError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<UpdateRecipeError> for AppError {
    fn from(err: UpdateRecipeError) -> Self {
        match err {
            UpdateRecipeError::Validation(errors) => AppError::Validation(errors),
            UpdateRecipeError::NotFound(_) => AppError::recipe_not_found(),
            UpdateRecipeError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<DeleteRecipeError> for AppError {
    fn from(err: DeleteRecipeError) -> Self {
        match err {
            DeleteRecipeError::NotFound(_) => AppError::recipe_not_found(),
            DeleteRecipeError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<GetRecipeError> for AppError {
    fn from(err: GetRecipeError) -> Self {
        match err {
            GetRecipeError::NotFound(_) => AppError::recipe_not_found(),
            GetRecipeError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<ListRecipesError> for AppError {
    fn from(err: ListRecipesError) -> Self {
        match err {
            ListRecipesError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<SearchRecipesError> for AppError {
    fn from(err: SearchRecipesError) -> Self {
        match err {
            SearchRecipesError::Database(e) => AppError::Database(e),
        }
    }
}
