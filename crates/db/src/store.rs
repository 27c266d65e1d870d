//! The storage contract for actors and movies.

use async_trait::async_trait;
use casting_core::types::DbId;

use crate::error::StoreResult;
use crate::models::actor::{Actor, ActorPatch, CreateActor};
use crate::models::movie::{CreateMovie, Movie, MoviePatch};

/// Persistence interface shared by the PostgreSQL and in-memory stores.
///
/// Contract for every implementation:
///
/// - `get_*` returns `Ok(None)` for an unknown id; absence is not an error.
/// - `create_*`, `update_*` validate their input and fail with
///   `CoreError::Validation` before touching storage.
/// - `update_*`, `delete_*` and the link operations fail with
///   `CoreError::NotFound` when a referenced id does not exist.
/// - Each mutating call is atomic and durable once it returns `Ok`.
///
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait CatalogStore: Send + Sync + 'static {
    /// Confirm the backing storage is reachable.
    async fn health_check(&self) -> StoreResult<()>;

    // Actors

    async fn list_actors(&self) -> StoreResult<Vec<Actor>>;

    async fn get_actor(&self, id: DbId) -> StoreResult<Option<Actor>>;

    /// Insert a new actor and return its assigned id.
    async fn create_actor(&self, input: &CreateActor) -> StoreResult<DbId>;

    /// Apply the fields present in `patch` and return the updated actor.
    async fn update_actor(&self, id: DbId, patch: &ActorPatch) -> StoreResult<Actor>;

    async fn delete_actor(&self, id: DbId) -> StoreResult<()>;

    // Movies

    async fn list_movies(&self) -> StoreResult<Vec<Movie>>;

    async fn get_movie(&self, id: DbId) -> StoreResult<Option<Movie>>;

    async fn create_movie(&self, input: &CreateMovie) -> StoreResult<DbId>;

    async fn update_movie(&self, id: DbId, patch: &MoviePatch) -> StoreResult<Movie>;

    async fn delete_movie(&self, id: DbId) -> StoreResult<()>;

    // Association

    /// Record that an actor plays in a movie. Linking twice is a no-op.
    async fn link_actor_to_movie(&self, actor_id: DbId, movie_id: DbId) -> StoreResult<()>;

    /// Remove an actor-movie link. Removing an absent link is a no-op.
    async fn unlink_actor_from_movie(&self, actor_id: DbId, movie_id: DbId) -> StoreResult<()>;
}
