//! Handlers for the `/actors` resource and the actor-movie links.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use casting_core::error::CoreError;
use casting_core::types::DbId;
use casting_db::models::actor::{Actor, ActorPatch, CreateActor, ACTOR};

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, JsonBody};
use crate::middleware::permission::{
    DeleteActors, GetActors, PatchActors, PostActors, RequirePermission,
};
use crate::response::{ActorResponse, ActorsResponse, CreatedResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ACTOR, id })
}

async fn find_actor(state: &AppState, actor_id: DbId) -> AppResult<Actor> {
    state
        .store
        .get_actor(actor_id)
        .await?
        .ok_or_else(|| not_found(actor_id))
}

/// GET /actors
pub async fn list_actors(
    _auth: RequirePermission<GetActors>,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let actors = state.store.list_actors().await?;

    Ok(Json(ActorsResponse::new(actors)))
}

/// GET /actors/{id}
pub async fn get_actor(
    _auth: RequirePermission<GetActors>,
    State(state): State<AppState>,
    IdPath(actor_id): IdPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let actor = find_actor(&state, actor_id).await?;

    Ok(Json(ActorsResponse::new(actor)))
}

/// POST /actors/new
pub async fn create_actor(
    _auth: RequirePermission<PostActors>,
    State(state): State<AppState>,
    body: JsonBody,
) -> AppResult<impl IntoResponse> {
    let input: CreateActor = body.decode()?;
    let actor_id = state.store.create_actor(&input).await?;

    tracing::info!(actor_id, name = %input.name, "Actor created");

    Ok(Json(CreatedResponse::new(actor_id)))
}

/// PATCH /actors/{id}
pub async fn update_actor(
    _auth: RequirePermission<PatchActors>,
    State(state): State<AppState>,
    IdPath(actor_id): IdPath<DbId>,
    body: JsonBody,
) -> AppResult<impl IntoResponse> {
    find_actor(&state, actor_id).await?;

    let patch: ActorPatch = body.decode()?;
    let actor = state.store.update_actor(actor_id, &patch).await?;

    tracing::info!(actor_id, "Actor updated");

    Ok(Json(ActorResponse::new(actor)))
}

/// DELETE /actors/{id}
///
/// Responds with the actor as they were just before deletion.
pub async fn delete_actor(
    _auth: RequirePermission<DeleteActors>,
    State(state): State<AppState>,
    IdPath(actor_id): IdPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let snapshot = find_actor(&state, actor_id).await?;

    state.store.delete_actor(actor_id).await?;

    tracing::info!(actor_id, "Actor deleted");

    Ok(Json(ActorResponse::new(snapshot)))
}

/// POST /actors/{id}/movies/{movie_id}
///
/// Cast the actor in a movie. Repeating the call is harmless.
pub async fn link_movie(
    _auth: RequirePermission<PatchActors>,
    State(state): State<AppState>,
    IdPath((actor_id, movie_id)): IdPath<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    state.store.link_actor_to_movie(actor_id, movie_id).await?;

    tracing::info!(actor_id, movie_id, "Actor linked to movie");

    Ok(Json(ActorResponse::new(find_actor(&state, actor_id).await?)))
}

/// DELETE /actors/{id}/movies/{movie_id}
pub async fn unlink_movie(
    _auth: RequirePermission<PatchActors>,
    State(state): State<AppState>,
    IdPath((actor_id, movie_id)): IdPath<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    state
        .store
        .unlink_actor_from_movie(actor_id, movie_id)
        .await?;

    tracing::info!(actor_id, movie_id, "Actor unlinked from movie");

    Ok(Json(ActorResponse::new(find_actor(&state, actor_id).await?)))
}
