use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::TaskService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Task service wrapping the configured store.
    pub tasks: TaskService,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
