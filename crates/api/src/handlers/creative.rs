use axum::Json;
use creative_core::creative::{Creative, NewCreative};

use crate::error::AppResult;
use crate::extract::JsonOrForm;
use crate::response::DataResponse;

/// POST /api/v2/creatives/validate
///
/// Validates a creative and returns the normalized record with defaults
/// applied. Nothing is persisted.
pub async fn validate(
    JsonOrForm(input): JsonOrForm<NewCreative>,
) -> AppResult<Json<DataResponse<Creative>>> {
    let creative = input.validate()?;
    tracing::debug!(quadrant = %creative.quadrant, "Creative validated");
    Ok(Json(DataResponse { data: creative }))
}
