use axum::routing::get;
use axum::Router;

use crate::handlers::system;
use crate::state::AppState;

/// Routes mounted at `/api/v2/system`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(system::health))
        .route("/status", get(system::status))
}
