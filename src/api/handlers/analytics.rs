//! Handler for click analytics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::analytics::AnalyticsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click count and visit history of a short link.
///
/// # Endpoint
///
/// `GET /links/analytics/{identifier}`
///
/// # Response
///
/// ```json
/// {
///   "totalClicks": 1,
///   "analytics": [ { "timestamp": 1700000000000 } ]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the identifier doesn't exist.
pub async fn analytics_handler(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let analytics = state.analytics_service.get_analytics(&identifier).await?;

    Ok(Json(analytics.into()))
}
