//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an identifier to its target URL, recording the visit.
///
/// # Endpoint
///
/// `GET /{identifier}`
///
/// # Request Flow
///
/// 1. Find the record and append a visit (single store operation)
/// 2. Return `302 Found` with `Location` set to the target URL
///
/// # Errors
///
/// Returns 404 Not Found if the identifier doesn't exist. Unknown identifiers
/// are never redirected to a default location.
pub async fn redirect_handler(
    Path(identifier): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let resolved = state.redirect_service.resolve(&identifier).await?;

    let location = HeaderValue::from_str(&resolved.target_url).map_err(|_| {
        AppError::storage(format!(
            "Target URL of '{}' is not a valid Location header",
            resolved.identifier
        ))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
