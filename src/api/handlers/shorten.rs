//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /links`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a/b" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "id": "http://localhost:3000/AbC12xyz" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing or empty, or the body is not
/// valid JSON. Returns 500 if the store fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let url = payload.url.unwrap_or_default();
    let short_link = state.link_service.shorten(&url).await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            id: short_link.short_url,
        }),
    ))
}
