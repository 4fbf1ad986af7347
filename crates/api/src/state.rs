use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the server holds no mutable state between requests --
/// every request re-reads the dataset from `config.data_path`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (dataset path, bind address, CORS origins).
    pub config: Arc<ServerConfig>,
}
