//! Repository for the `play_in` association table.

use casting_core::types::DbId;
use sqlx::PgExecutor;

pub struct PlayInRepo;

impl PlayInRepo {
    /// Insert a link; an existing link is left untouched.
    pub async fn link<'e, E: PgExecutor<'e>>(
        executor: E,
        actor_id: DbId,
        movie_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO play_in (actor_id, movie_id) VALUES ($1, $2) \
             ON CONFLICT ON CONSTRAINT pk_play_in DO NOTHING",
        )
        .bind(actor_id)
        .bind(movie_id)
        .execute(executor)
        .await?;
        Ok(())
    }

    pub async fn unlink<'e, E: PgExecutor<'e>>(
        executor: E,
        actor_id: DbId,
        movie_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM play_in WHERE actor_id = $1 AND movie_id = $2")
            .bind(actor_id)
            .bind(movie_id)
            .execute(executor)
            .await?;
        Ok(())
    }
}
