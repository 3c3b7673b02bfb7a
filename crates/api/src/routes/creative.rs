use axum::routing::post;
use axum::Router;

use crate::handlers::creative;
use crate::state::AppState;

/// Routes mounted at `/api/v2/creatives`.
pub fn router() -> Router<AppState> {
    Router::new().route("/validate", post(creative::validate))
}
