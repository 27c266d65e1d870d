use axum::routing::{get, post};
use axum::Router;

use crate::handlers::actors;
use crate::state::AppState;

/// Actor routes, including links to movies.
///
/// ```text
/// GET    /actors                          -> list_actors
/// POST   /actors/new                      -> create_actor
/// GET    /actors/{id}                     -> get_actor
/// PATCH  /actors/{id}                     -> update_actor
/// DELETE /actors/{id}                     -> delete_actor
/// POST   /actors/{id}/movies/{movie_id}   -> link_movie
/// DELETE /actors/{id}/movies/{movie_id}   -> unlink_movie
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/actors", get(actors::list_actors))
        .route("/actors/new", post(actors::create_actor))
        .route(
            "/actors/{id}",
            get(actors::get_actor)
                .patch(actors::update_actor)
                .delete(actors::delete_actor),
        )
        .route(
            "/actors/{id}/movies/{movie_id}",
            post(actors::link_movie).delete(actors::unlink_movie),
        )
}
