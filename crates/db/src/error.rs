//! Storage error types.

use casting_core::error::CoreError;
use casting_core::types::DbId;

/// Failures surfaced by a [`CatalogStore`](crate::store::CatalogStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A domain failure: missing entity or rejected input.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The database rejected or failed the statement.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        StoreError::Core(CoreError::NotFound { entity, id })
    }

    /// True when the error reports an absent entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Core(CoreError::NotFound { .. }))
    }
}
