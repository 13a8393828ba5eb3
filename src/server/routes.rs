//! Axum router configuration for the recipe API

use crate::server::handlers;
use crate::server::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Create the application router
///
/// With `cors_permissive` set, any origin may call the API.
pub fn create_router(state: AppState, cors_permissive: bool) -> Router {
    let router = Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/api/recipes",
            post(handlers::create_recipe).get(handlers::list_recipes),
        )
        .route(
            "/api/recipes/:id",
            get(handlers::get_recipe)
                .put(handlers::replace_recipe)
                .patch(handlers::patch_recipe)
                .delete(handlers::delete_recipe),
        )
        .with_state(state);

    if cors_permissive {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router.layer(cors)
    } else {
        router
    }
}
