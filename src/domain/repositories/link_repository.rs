//! Repository trait for mapping records.

use crate::domain::entities::{Link, NewLink, Visit};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of a successful visit: the target to redirect to, the visit that
/// was appended, and the click count including it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub identifier: String,
    pub target_url: String,
    pub visit: Visit,
    pub total_clicks: i64,
}

/// A mapping record together with its full visit history.
///
/// `history` is in insertion order and `total_clicks == history.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkAnalytics {
    pub link: Link,
    pub total_clicks: i64,
    pub history: Vec<Visit>,
}

impl LinkAnalytics {
    pub fn new(link: Link, history: Vec<Visit>) -> Self {
        Self {
            link,
            total_clicks: history.len() as i64,
            history,
        }
    }
}

/// Repository interface for mapping records.
///
/// Records are created once, then only ever have visits appended. There is no
/// update or delete path.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new mapping record with an empty visit history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateIdentifier`] if the identifier is taken.
    /// Returns [`AppError::Storage`] on other store errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds the record for `identifier` and appends a visit to its history
    /// in a single store operation.
    ///
    /// The visit is stamped by the store while it holds the record exclusively,
    /// so history order matches timestamp order. Concurrent calls for the same
    /// identifier never lose a visit.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ResolvedLink))` if the record exists (visit recorded)
    /// - `Ok(None)` if no record matches (nothing written)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on store errors.
    async fn record_visit(&self, identifier: &str) -> Result<Option<ResolvedLink>, AppError>;

    /// Reads a record and its visit history without modifying it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on store errors.
    async fn find_with_history(&self, identifier: &str)
    -> Result<Option<LinkAnalytics>, AppError>;

    /// Counts all mapping records.
    async fn count_links(&self) -> Result<i64, AppError>;

    /// Counts visits across all records.
    async fn count_visits(&self) -> Result<i64, AppError>;

    /// Performs a store round-trip.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the store is unreachable.
    async fn health_check(&self) -> Result<(), AppError>;
}
