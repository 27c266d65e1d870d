//! Repository for the `actors` table.

use casting_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::actor::{Actor, ActorPatch, CreateActor};

/// Column list for `actors` queries (aliased `a`), including the related
/// movie names.
const COLUMNS: &str = "\
    a.id, a.name, a.age, a.email, a.salary, \
    ARRAY(SELECT m.name FROM play_in p JOIN movies m ON m.id = p.movie_id \
          WHERE p.actor_id = a.id ORDER BY m.id) AS movies";

/// Provides data access for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// List all actors, oldest first.
    pub async fn list<'e, E: PgExecutor<'e>>(executor: E) -> Result<Vec<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors a ORDER BY a.id");
        sqlx::query_as::<_, Actor>(&query)
            .fetch_all(executor)
            .await
    }

    pub async fn find_by_id<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
    ) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors a WHERE a.id = $1");
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    pub async fn exists<'e, E: PgExecutor<'e>>(executor: E, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM actors WHERE id = $1)")
            .bind(id)
            .fetch_one(executor)
            .await
    }

    /// Insert a new actor, returning the assigned id.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        dto: &CreateActor,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO actors (name, age, email, salary) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(&dto.name)
        .bind(dto.age)
        .bind(&dto.email)
        .bind(dto.salary)
        .fetch_one(executor)
        .await
    }

    /// Apply a partial update.
    ///
    /// Each column has a "present" flag so an explicit `null` can clear it
    /// while omitted fields keep their value. Returns `false` if no row
    /// matched.
    pub async fn update<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
        patch: &ActorPatch,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE actors SET \
                 name = CASE WHEN $2 THEN $3 ELSE name END, \
                 age = CASE WHEN $4 THEN $5 ELSE age END, \
                 email = CASE WHEN $6 THEN $7 ELSE email END, \
                 salary = CASE WHEN $8 THEN $9 ELSE salary END \
             WHERE id = $1",
        )
        .bind(id)
        .bind(patch.name.is_some())
        .bind(patch.name.clone().flatten())
        .bind(patch.age.is_some())
        .bind(patch.age.flatten())
        .bind(patch.email.is_some())
        .bind(patch.email.clone().flatten())
        .bind(patch.salary.is_some())
        .bind(patch.salary.flatten())
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an actor; their `play_in` rows cascade. Returns `false` if no
    /// row matched.
    pub async fn delete<'e, E: PgExecutor<'e>>(executor: E, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actors WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
