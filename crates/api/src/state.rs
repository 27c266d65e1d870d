use std::sync::Arc;

use casting_db::CatalogStore;

use crate::auth::jwt::TokenVerifier;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Actor/movie persistence.
    pub store: Arc<dyn CatalogStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Bearer token verifier, built once from `config.auth`.
    pub verifier: Arc<TokenVerifier>,
}
