//! Identifier resolution with visit tracking.

use std::sync::Arc;

use crate::domain::repositories::{LinkRepository, ResolvedLink};
use crate::error::AppError;
use crate::utils::code_generator::is_valid_code;
use tracing::debug;

/// Service resolving identifiers to their target URLs.
///
/// Every successful resolution records exactly one visit.
pub struct RedirectService {
    repository: Arc<dyn LinkRepository>,
}

impl RedirectService {
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Resolves `identifier` and records a visit.
    ///
    /// Lookup, timestamping and append are one store operation, so the
    /// returned [`ResolvedLink::total_clicks`] already counts this visit.
    ///
    /// Identifiers that cannot have been generated (wrong length or alphabet)
    /// are answered without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    /// Returns [`AppError::Storage`] on store errors.
    pub async fn resolve(&self, identifier: &str) -> Result<ResolvedLink, AppError> {
        if !is_valid_code(identifier) {
            return Err(not_found(identifier));
        }

        let resolved = self
            .repository
            .record_visit(identifier)
            .await?
            .ok_or_else(|| not_found(identifier))?;

        debug!(
            identifier,
            timestamp = resolved.visit.timestamp,
            total_clicks = resolved.total_clicks,
            "Visit recorded"
        );

        Ok(resolved)
    }
}

fn not_found(identifier: &str) -> AppError {
    AppError::not_found(format!("Short link '{identifier}' not found"))
}
