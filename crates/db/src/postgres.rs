//! PostgreSQL implementation of [`CatalogStore`].

use async_trait::async_trait;
use casting_core::types::DbId;

use crate::error::{StoreError, StoreResult};
use crate::models::actor::{Actor, ActorPatch, CreateActor, ACTOR};
use crate::models::movie::{CreateMovie, Movie, MoviePatch, MOVIE};
use crate::repositories::{ActorRepo, MovieRepo, PlayInRepo};
use crate::store::CatalogStore;
use crate::DbPool;

/// Entity store backed by a pooled PostgreSQL connection.
///
/// Multi-statement operations run in a transaction; dropping it on an early
/// return rolls back.
#[derive(Debug, Clone)]
pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Fail with `NotFound` unless both sides of a link exist.
    async fn ensure_link_targets(
        conn: &mut sqlx::PgConnection,
        actor_id: DbId,
        movie_id: DbId,
    ) -> StoreResult<()> {
        if !ActorRepo::exists(&mut *conn, actor_id).await? {
            return Err(StoreError::not_found(ACTOR, actor_id));
        }
        if !MovieRepo::exists(&mut *conn, movie_id).await? {
            return Err(StoreError::not_found(MOVIE, movie_id));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn list_actors(&self) -> StoreResult<Vec<Actor>> {
        Ok(ActorRepo::list(&self.pool).await?)
    }

    async fn get_actor(&self, id: DbId) -> StoreResult<Option<Actor>> {
        Ok(ActorRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_actor(&self, input: &CreateActor) -> StoreResult<DbId> {
        input.validate()?;
        Ok(ActorRepo::create(&self.pool, input).await?)
    }

    async fn update_actor(&self, id: DbId, patch: &ActorPatch) -> StoreResult<Actor> {
        patch.validate()?;

        let mut tx = self.pool.begin().await?;
        if !ActorRepo::update(&mut *tx, id, patch).await? {
            return Err(StoreError::not_found(ACTOR, id));
        }
        let actor = ActorRepo::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| StoreError::not_found(ACTOR, id))?;
        tx.commit().await?;

        Ok(actor)
    }

    async fn delete_actor(&self, id: DbId) -> StoreResult<()> {
        if !ActorRepo::delete(&self.pool, id).await? {
            return Err(StoreError::not_found(ACTOR, id));
        }
        Ok(())
    }

    async fn list_movies(&self) -> StoreResult<Vec<Movie>> {
        Ok(MovieRepo::list(&self.pool).await?)
    }

    async fn get_movie(&self, id: DbId) -> StoreResult<Option<Movie>> {
        Ok(MovieRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_movie(&self, input: &CreateMovie) -> StoreResult<DbId> {
        input.validate()?;
        Ok(MovieRepo::create(&self.pool, input).await?)
    }

    async fn update_movie(&self, id: DbId, patch: &MoviePatch) -> StoreResult<Movie> {
        patch.validate()?;

        let mut tx = self.pool.begin().await?;
        if !MovieRepo::update(&mut *tx, id, patch).await? {
            return Err(StoreError::not_found(MOVIE, id));
        }
        let movie = MovieRepo::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| StoreError::not_found(MOVIE, id))?;
        tx.commit().await?;

        Ok(movie)
    }

    async fn delete_movie(&self, id: DbId) -> StoreResult<()> {
        if !MovieRepo::delete(&self.pool, id).await? {
            return Err(StoreError::not_found(MOVIE, id));
        }
        Ok(())
    }

    async fn link_actor_to_movie(&self, actor_id: DbId, movie_id: DbId) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;
        Self::ensure_link_targets(&mut tx, actor_id, movie_id).await?;
        PlayInRepo::link(&mut *tx, actor_id, movie_id).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn unlink_actor_from_movie(&self, actor_id: DbId, movie_id: DbId) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;
        Self::ensure_link_targets(&mut tx, actor_id, movie_id).await?;
        PlayInRepo::unlink(&mut *tx, actor_id, movie_id).await?;
        tx.commit().await?;
        Ok(())
    }
}
