//! In-memory implementation of [`CatalogStore`] for tests.
//!
//! All state sits behind one `tokio::sync::RwLock`, so every operation is
//! atomic with respect to the others. Ids are assigned from a counter per
//! table, starting at 1, and never reused.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use casting_core::types::DbId;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::models::actor::{Actor, ActorPatch, CreateActor, ACTOR};
use crate::models::movie::{CreateMovie, Movie, MoviePatch, MOVIE};
use crate::store::CatalogStore;

/// In-memory entity store.
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    inner: RwLock<Catalog>,
}

/// Rows are kept without their relation lists; those are derived from
/// `play_in` when a view is built.
#[derive(Debug, Default)]
struct Catalog {
    actors: BTreeMap<DbId, Actor>,
    movies: BTreeMap<DbId, Movie>,
    /// `(actor_id, movie_id)` pairs.
    play_in: BTreeSet<(DbId, DbId)>,
    next_actor_id: DbId,
    next_movie_id: DbId,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new store wrapped in `Arc`.
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub async fn actor_count(&self) -> usize {
        self.inner.read().await.actors.len()
    }

    pub async fn movie_count(&self) -> usize {
        self.inner.read().await.movies.len()
    }
}

impl Catalog {
    fn actor_view(&self, row: &Actor) -> Actor {
        let movies = self
            .play_in
            .iter()
            .filter(|(actor_id, _)| *actor_id == row.id)
            .filter_map(|(_, movie_id)| self.movies.get(movie_id))
            .map(|movie| movie.name.clone())
            .collect();
        Actor {
            movies,
            ..row.clone()
        }
    }

    fn movie_view(&self, row: &Movie) -> Movie {
        // `play_in` is ordered by actor id first, so names come out in
        // actor-id order like the SQL query.
        let actors = self
            .play_in
            .iter()
            .filter(|(_, movie_id)| *movie_id == row.id)
            .filter_map(|(actor_id, _)| self.actors.get(actor_id))
            .map(|actor| actor.name.clone())
            .collect();
        Movie {
            actors,
            ..row.clone()
        }
    }

    fn ensure_link_targets(&self, actor_id: DbId, movie_id: DbId) -> StoreResult<()> {
        if !self.actors.contains_key(&actor_id) {
            return Err(StoreError::not_found(ACTOR, actor_id));
        }
        if !self.movies.contains_key(&movie_id) {
            return Err(StoreError::not_found(MOVIE, movie_id));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list_actors(&self) -> StoreResult<Vec<Actor>> {
        let catalog = self.inner.read().await;
        Ok(catalog
            .actors
            .values()
            .map(|row| catalog.actor_view(row))
            .collect())
    }

    async fn get_actor(&self, id: DbId) -> StoreResult<Option<Actor>> {
        let catalog = self.inner.read().await;
        Ok(catalog.actors.get(&id).map(|row| catalog.actor_view(row)))
    }

    async fn create_actor(&self, input: &CreateActor) -> StoreResult<DbId> {
        input.validate()?;

        let mut catalog = self.inner.write().await;
        catalog.next_actor_id += 1;
        let id = catalog.next_actor_id;
        catalog.actors.insert(
            id,
            Actor {
                id,
                name: input.name.clone(),
                age: input.age,
                email: input.email.clone(),
                salary: input.salary,
                movies: Vec::new(),
            },
        );
        Ok(id)
    }

    async fn update_actor(&self, id: DbId, patch: &ActorPatch) -> StoreResult<Actor> {
        patch.validate()?;

        let mut catalog = self.inner.write().await;
        let row = catalog
            .actors
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found(ACTOR, id))?;
        patch.apply_to(row);
        let row = row.clone();
        Ok(catalog.actor_view(&row))
    }

    async fn delete_actor(&self, id: DbId) -> StoreResult<()> {
        let mut catalog = self.inner.write().await;
        if catalog.actors.remove(&id).is_none() {
            return Err(StoreError::not_found(ACTOR, id));
        }
        catalog.play_in.retain(|(actor_id, _)| *actor_id != id);
        Ok(())
    }

    async fn list_movies(&self) -> StoreResult<Vec<Movie>> {
        let catalog = self.inner.read().await;
        Ok(catalog
            .movies
            .values()
            .map(|row| catalog.movie_view(row))
            .collect())
    }

    async fn get_movie(&self, id: DbId) -> StoreResult<Option<Movie>> {
        let catalog = self.inner.read().await;
        Ok(catalog.movies.get(&id).map(|row| catalog.movie_view(row)))
    }

    async fn create_movie(&self, input: &CreateMovie) -> StoreResult<DbId> {
        input.validate()?;

        let mut catalog = self.inner.write().await;
        catalog.next_movie_id += 1;
        let id = catalog.next_movie_id;
        catalog.movies.insert(
            id,
            Movie {
                id,
                name: input.name.clone(),
                length: input.length,
                genre: input.genre.clone(),
                actors: Vec::new(),
            },
        );
        Ok(id)
    }

    async fn update_movie(&self, id: DbId, patch: &MoviePatch) -> StoreResult<Movie> {
        patch.validate()?;

        let mut catalog = self.inner.write().await;
        let row = catalog
            .movies
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found(MOVIE, id))?;
        patch.apply_to(row);
        let row = row.clone();
        Ok(catalog.movie_view(&row))
    }

    async fn delete_movie(&self, id: DbId) -> StoreResult<()> {
        let mut catalog = self.inner.write().await;
        if catalog.movies.remove(&id).is_none() {
            return Err(StoreError::not_found(MOVIE, id));
        }
        catalog.play_in.retain(|(_, movie_id)| *movie_id != id);
        Ok(())
    }

    async fn link_actor_to_movie(&self, actor_id: DbId, movie_id: DbId) -> StoreResult<()> {
        let mut catalog = self.inner.write().await;
        catalog.ensure_link_targets(actor_id, movie_id)?;
        catalog.play_in.insert((actor_id, movie_id));
        Ok(())
    }

    async fn unlink_actor_from_movie(&self, actor_id: DbId, movie_id: DbId) -> StoreResult<()> {
        let mut catalog = self.inner.write().await;
        catalog.ensure_link_targets(actor_id, movie_id)?;
        catalog.play_in.remove(&(actor_id, movie_id));
        Ok(())
    }
}
