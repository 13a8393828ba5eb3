//! HTTP request handlers for the recipe API
//!
//! An unknown id is not an error: GET, PUT and PATCH answer 200 with an
//! empty body, and DELETE answers 200 with `false`.

use crate::model::{NewRecipe, Recipe, RecipePatch};
use crate::server::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::debug;

/// JSON recipe when present, otherwise 200 with no body.
fn recipe_or_empty(recipe: Option<Recipe>) -> Response {
    match recipe {
        Some(recipe) => Json(recipe).into_response(),
        None => StatusCode::OK.into_response(),
    }
}

/// Create a recipe
///
/// POST /api/recipes
pub async fn create_recipe(
    State(store): State<AppState>,
    Json(fields): Json<NewRecipe>,
) -> Json<Recipe> {
    let recipe = store.create(fields);
    debug!("POST /api/recipes -> {}", recipe.id);
    Json(recipe)
}

/// List all recipes in insertion order
///
/// GET /api/recipes
pub async fn list_recipes(State(store): State<AppState>) -> Json<Vec<Recipe>> {
    Json(store.list())
}

/// GET /api/recipes/:id
pub async fn get_recipe(State(store): State<AppState>, Path(id): Path<u64>) -> Response {
    let recipe = store.get(id);
    if recipe.is_none() {
        debug!("GET /api/recipes/{}: not found", id);
    }
    recipe_or_empty(recipe)
}

/// Replace every field of a recipe
///
/// PUT /api/recipes/:id
pub async fn replace_recipe(
    State(store): State<AppState>,
    Path(id): Path<u64>,
    Json(fields): Json<NewRecipe>,
) -> Response {
    let recipe = store.replace(id, fields);
    if recipe.is_none() {
        debug!("PUT /api/recipes/{}: not found", id);
    }
    recipe_or_empty(recipe)
}

/// Update only the supplied fields of a recipe
///
/// PATCH /api/recipes/:id
pub async fn patch_recipe(
    State(store): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<RecipePatch>,
) -> Response {
    if patch.is_empty() {
        debug!("PATCH /api/recipes/{}: no fields supplied", id);
    }
    let recipe = store.patch(id, patch);
    if recipe.is_none() {
        debug!("PATCH /api/recipes/{}: not found", id);
    }
    recipe_or_empty(recipe)
}

/// DELETE /api/recipes/:id
pub async fn delete_recipe(State(store): State<AppState>, Path(id): Path<u64>) -> Json<bool> {
    let deleted = store.delete(id);
    debug!("DELETE /api/recipes/{} -> {}", id, deleted);
    Json(deleted)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}
