//! Handlers for the `/movies` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use casting_core::error::CoreError;
use casting_core::types::DbId;
use casting_db::models::movie::{CreateMovie, MoviePatch, MOVIE};

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, JsonBody};
use crate::middleware::permission::{
    DeleteMovies, GetMovies, PatchMovies, PostMovies, RequirePermission,
};
use crate::response::{CreatedResponse, MovieResponse, MoviesResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: MOVIE, id })
}

/// GET /movies
pub async fn list_movies(
    _auth: RequirePermission<GetMovies>,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let movies = state.store.list_movies().await?;

    Ok(Json(MoviesResponse::new(movies)))
}

/// GET /movies/{id}
pub async fn get_movie(
    _auth: RequirePermission<GetMovies>,
    State(state): State<AppState>,
    IdPath(movie_id): IdPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let movie = state
        .store
        .get_movie(movie_id)
        .await?
        .ok_or_else(|| not_found(movie_id))?;

    Ok(Json(MoviesResponse::new(movie)))
}

/// POST /movies/new
///
/// Responds with the assigned id.
pub async fn create_movie(
    _auth: RequirePermission<PostMovies>,
    State(state): State<AppState>,
    body: JsonBody,
) -> AppResult<impl IntoResponse> {
    let input: CreateMovie = body.decode()?;
    let movie_id = state.store.create_movie(&input).await?;

    tracing::info!(movie_id, name = %input.name, "Movie created");

    Ok(Json(CreatedResponse::new(movie_id)))
}

/// PATCH /movies/{id}
///
/// Only fields present in the body change; `null` clears an optional field.
pub async fn update_movie(
    _auth: RequirePermission<PatchMovies>,
    State(state): State<AppState>,
    IdPath(movie_id): IdPath<DbId>,
    body: JsonBody,
) -> AppResult<impl IntoResponse> {
    if state.store.get_movie(movie_id).await?.is_none() {
        return Err(not_found(movie_id));
    }

    let patch: MoviePatch = body.decode()?;
    let movie = state.store.update_movie(movie_id, &patch).await?;

    tracing::info!(movie_id, "Movie updated");

    Ok(Json(MovieResponse::new(movie)))
}

/// DELETE /movies/{id}
///
/// Responds with the movie as it was just before deletion.
pub async fn delete_movie(
    _auth: RequirePermission<DeleteMovies>,
    State(state): State<AppState>,
    IdPath(movie_id): IdPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let snapshot = state
        .store
        .get_movie(movie_id)
        .await?
        .ok_or_else(|| not_found(movie_id))?;

    state.store.delete_movie(movie_id).await?;

    tracing::info!(movie_id, "Movie deleted");

    Ok(Json(MovieResponse::new(snapshot)))
}
