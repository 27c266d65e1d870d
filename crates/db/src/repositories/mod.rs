//! Query helpers, one per table, used by [`PgCatalogStore`](crate::postgres::PgCatalogStore).
//!
//! Each function accepts any `PgExecutor` so it can run against the pool or
//! inside a transaction.

pub mod actor_repo;
pub mod movie_repo;
pub mod play_in_repo;

pub use actor_repo::ActorRepo;
pub use movie_repo::MovieRepo;
pub use play_in_repo::PlayInRepo;
