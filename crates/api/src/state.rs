use std::sync::Arc;

use backlog_db::storage::Storage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Storage client, built once per process.
    pub storage: Arc<Storage>,
    /// Server configuration (JWT settings are read by the session extractors).
    pub config: Arc<ServerConfig>,
}
