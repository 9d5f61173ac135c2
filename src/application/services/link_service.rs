//! Link creation service.

use std::sync::Arc;

use crate::domain::entities::NewLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use axum::http::HeaderValue;
use tracing::{info, warn};

/// Message returned when the target URL is missing or empty.
pub const URL_REQUIRED: &str = "url is required";

/// Message returned when the target URL cannot be sent as a `Location` header.
pub const URL_NOT_REDIRECTABLE: &str = "url must not contain control characters";

/// Identifier generation attempts before a collision is reported as a
/// storage failure.
pub const MAX_GENERATION_ATTEMPTS: usize = 5;

/// A freshly created short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub identifier: String,
    /// Fully-qualified link handed to clients (`base_url/identifier`).
    pub short_url: String,
    pub target_url: String,
}

/// Service for creating short links.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the public address prefixed to identifiers; a trailing
    /// slash is ignored.
    pub fn new(repository: Arc<dyn LinkRepository>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_url: base_url.into(),
        }
    }

    /// Shortens `target_url` under a newly generated identifier.
    ///
    /// Only presence and header safety are checked: the URL must contain
    /// something other than whitespace, and must be usable as a `Location`
    /// header value. No URL syntax validation is performed. The URL is stored
    /// exactly as given.
    ///
    /// # Code Generation
    ///
    /// Identifiers are not checked before insert. When the store reports a
    /// duplicate identifier, a new one is generated, up to
    /// [`MAX_GENERATION_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is blank or contains control
    /// characters (nothing is stored).
    /// Returns [`AppError::Storage`] if persistence fails or every attempt
    /// collided.
    pub async fn shorten(&self, target_url: &str) -> Result<ShortLink, AppError> {
        if target_url.trim().is_empty() {
            return Err(AppError::validation(URL_REQUIRED));
        }
        if HeaderValue::from_str(target_url).is_err() {
            return Err(AppError::validation(URL_NOT_REDIRECTABLE));
        }

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let new_link = NewLink {
                identifier: generate_code(),
                target_url: target_url.to_string(),
            };

            match self.repository.create(new_link).await {
                Ok(link) => {
                    info!(identifier = %link.identifier, "Short link created");
                    return Ok(ShortLink {
                        short_url: self.short_url(&link.identifier),
                        identifier: link.identifier,
                        target_url: link.target_url,
                    });
                }
                Err(AppError::DuplicateIdentifier(constraint)) => {
                    warn!(attempt, %constraint, "Identifier collision, regenerating");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::storage(format!(
            "Failed to generate a unique identifier after {MAX_GENERATION_ATTEMPTS} attempts"
        )))
    }

    /// Builds the fully-qualified short link for an identifier.
    pub fn short_url(&self, identifier: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), identifier)
    }
}
