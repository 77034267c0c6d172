use std::sync::Arc;

use cinelog_db::repositories::MovieRepository;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Handlers use it to open transactions.
    pub pool: cinelog_db::DbPool,
    /// Movie persistence, behind the repository interface.
    pub repo: Arc<dyn MovieRepository>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
