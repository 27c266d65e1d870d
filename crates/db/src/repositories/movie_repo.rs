//! Repository for the `movies` table.

use casting_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::movie::{CreateMovie, Movie, MoviePatch};

/// Column list for `movies` queries (aliased `m`), including the related
/// actor names.
const COLUMNS: &str = "\
    m.id, m.name, m.length, m.genre, \
    ARRAY(SELECT a.name FROM play_in p JOIN actors a ON a.id = p.actor_id \
          WHERE p.movie_id = m.id ORDER BY a.id) AS actors";

/// Provides data access for movies.
pub struct MovieRepo;

impl MovieRepo {
    pub async fn list<'e, E: PgExecutor<'e>>(executor: E) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies m ORDER BY m.id");
        sqlx::query_as::<_, Movie>(&query)
            .fetch_all(executor)
            .await
    }

    pub async fn find_by_id<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies m WHERE m.id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    pub async fn exists<'e, E: PgExecutor<'e>>(executor: E, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(executor)
            .await
    }

    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        dto: &CreateMovie,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO movies (name, length, genre) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(&dto.name)
        .bind(dto.length)
        .bind(&dto.genre)
        .fetch_one(executor)
        .await
    }

    /// Partial update with per-column "present" flags, as in
    /// [`ActorRepo::update`](super::ActorRepo::update).
    pub async fn update<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
        patch: &MoviePatch,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE movies SET \
                 name = CASE WHEN $2 THEN $3 ELSE name END, \
                 length = CASE WHEN $4 THEN $5 ELSE length END, \
                 genre = CASE WHEN $6 THEN $7 ELSE genre END \
             WHERE id = $1",
        )
        .bind(id)
        .bind(patch.name.is_some())
        .bind(patch.name.clone().flatten())
        .bind(patch.length.is_some())
        .bind(patch.length.flatten())
        .bind(patch.genre.is_some())
        .bind(patch.genre.clone().flatten())
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete<'e, E: PgExecutor<'e>>(executor: E, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
