//! API route configuration.

use crate::api::handlers::{analytics_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link management routes.
///
/// # Endpoints
///
/// - `POST /links`                          - Create a short link
/// - `GET  /links/analytics/{identifier}`   - Click analytics for a link
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(shorten_handler))
        .route("/links/analytics/{identifier}", get(analytics_handler))
}
