//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// `url` is optional at the serde level so a missing field is reported as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten. Only presence is checked.
    #[validate(
        required(message = "url is required"),
        length(min = 1, message = "url is required")
    )]
    pub url: Option<String>,
}

/// Response carrying the fully-qualified short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub id: String,
}
