//! Cross-origin policy for the browser frontend.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Creates the CORS layer.
///
/// The frontend is served from a different origin and calls the API with
/// `fetch`, so any origin may `GET` and `POST` JSON. No credentials are
/// involved.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
