//! Click analytics service.

use std::sync::Arc;

use crate::domain::repositories::{LinkAnalytics, LinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::is_valid_code;

/// Service reporting visit counts and history. Never writes to the store.
pub struct AnalyticsService {
    repository: Arc<dyn LinkRepository>,
}

impl AnalyticsService {
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Returns the total click count and the full visit history of a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    /// Returns [`AppError::Storage`] on store errors.
    pub async fn get_analytics(&self, identifier: &str) -> Result<LinkAnalytics, AppError> {
        if !is_valid_code(identifier) {
            return Err(not_found(identifier));
        }

        self.repository
            .find_with_history(identifier)
            .await?
            .ok_or_else(|| not_found(identifier))
    }

    /// Store-wide totals: `(links, visits)`.
    pub async fn totals(&self) -> Result<(i64, i64), AppError> {
        let links = self.repository.count_links().await?;
        let visits = self.repository.count_visits().await?;
        Ok((links, visits))
    }
}

fn not_found(identifier: &str) -> AppError {
    AppError::not_found(format!("Analytics for '{identifier}' not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Link, Visit};
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn analytics_with(visits: &[i64]) -> LinkAnalytics {
        let link = Link::new(
            1,
            "AbC12xyz".to_string(),
            "https://example.com".to_string(),
            Utc::now(),
        );
        LinkAnalytics::new(link, visits.iter().copied().map(Visit::new).collect())
    }

    #[tokio::test]
    async fn test_get_analytics_success() {
        let mut mock_repo = MockLinkRepository::new();
        let analytics = analytics_with(&[10, 20, 30]);
        mock_repo
            .expect_find_with_history()
            .withf(|identifier| identifier == "AbC12xyz")
            .times(1)
            .returning(move |_| Ok(Some(analytics.clone())));

        let service = AnalyticsService::new(Arc::new(mock_repo));

        let result = service.get_analytics("AbC12xyz").await.unwrap();
        assert_eq!(result.total_clicks, 3);
        assert_eq!(
            result.history,
            vec![Visit::new(10), Visit::new(20), Visit::new(30)]
        );
    }

    #[tokio::test]
    async fn test_get_analytics_never_visited() {
        let mut mock_repo = MockLinkRepository::new();
        let analytics = analytics_with(&[]);
        mock_repo
            .expect_find_with_history()
            .times(1)
            .returning(move |_| Ok(Some(analytics.clone())));

        let service = AnalyticsService::new(Arc::new(mock_repo));

        let result = service.get_analytics("AbC12xyz").await.unwrap();
        assert_eq!(result.total_clicks, 0);
        assert!(result.history.is_empty());
    }

    #[tokio::test]
    async fn test_get_analytics_not_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_with_history()
            .times(1)
            .returning(|_| Ok(None));

        let service = AnalyticsService::new(Arc::new(mock_repo));

        let err = service.get_analytics("missing1").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_analytics_malformed_identifier() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_find_with_history().times(0);

        let service = AnalyticsService::new(Arc::new(mock_repo));

        let err = service.get_analytics("nope").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_analytics_is_idempotent() {
        let mut mock_repo = MockLinkRepository::new();
        let analytics = analytics_with(&[5, 6]);
        mock_repo
            .expect_find_with_history()
            .times(2)
            .returning(move |_| Ok(Some(analytics.clone())));

        let service = AnalyticsService::new(Arc::new(mock_repo));

        let first = service.get_analytics("AbC12xyz").await.unwrap();
        let second = service.get_analytics("AbC12xyz").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_totals() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_count_links().times(1).returning(|| Ok(4));
        mock_repo.expect_count_visits().times(1).returning(|| Ok(17));

        let service = AnalyticsService::new(Arc::new(mock_repo));

        assert_eq!(service.totals().await.unwrap(), (4, 17));
    }
}
