//! Entity store for actors, movies and the `play_in` association.
//!
//! - [`store::CatalogStore`] -- the storage contract handlers depend on.
//! - [`postgres::PgCatalogStore`] -- PostgreSQL implementation (production).
//! - [`memory::MemoryCatalogStore`] -- in-process implementation for tests
//!   and local experiments.

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repositories;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryCatalogStore;
pub use postgres::PgCatalogStore;
pub use store::CatalogStore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
