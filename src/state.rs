//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, LinkService, RedirectService};
use crate::domain::repositories::LinkRepository;

/// Services shared by all handlers.
///
/// Cheap to clone: every field is reference-counted. Holds no mutable state;
/// everything shared lives in the store behind `repository`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
    pub analytics_service: Arc<AnalyticsService>,
    pub repository: Arc<dyn LinkRepository>,
}

impl AppState {
    /// Builds all services on top of a single store.
    pub fn new(repository: Arc<dyn LinkRepository>, base_url: impl Into<String>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository.clone(), base_url)),
            redirect_service: Arc::new(RedirectService::new(repository.clone())),
            analytics_service: Arc::new(AnalyticsService::new(repository.clone())),
            repository,
        }
    }
}
