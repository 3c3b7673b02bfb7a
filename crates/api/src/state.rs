use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; nothing in it is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration, including the n8n connection settings.
    pub config: Arc<ServerConfig>,
    /// Process start, used to report uptime.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig, started_at: Instant) -> Self {
        Self {
            config: Arc::new(config),
            started_at,
        }
    }
}
