pub mod creative;
pub mod system;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v2` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /system/health                                  liveness payload (GET)
/// /system/status                                  uptime, memory, environment (GET)
///
/// /creatives/validate                             validate a creative (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/system", system::router())
        .nest("/creatives", creative::router())
}
