pub mod actors;
pub mod health;
pub mod movies;

use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// GET    /                                health check (public)
///
/// GET    /movies                          get:movies
/// POST   /movies/new                      post:movies
/// GET    /movies/{id}                     get:movies
/// PATCH  /movies/{id}                     patch:movies
/// DELETE /movies/{id}                     delete:movies
///
/// GET    /actors                          get:actors
/// POST   /actors/new                      post:actors
/// GET    /actors/{id}                     get:actors
/// PATCH  /actors/{id}                     patch:actors
/// DELETE /actors/{id}                     delete:actors
/// POST   /actors/{id}/movies/{movie_id}   patch:actors
/// DELETE /actors/{id}/movies/{movie_id}   patch:actors
/// ```
///
/// Unmatched paths and methods answer with the JSON error envelope.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(movies::router())
        .merge(actors::router())
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
