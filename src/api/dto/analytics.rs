//! DTOs for the click analytics endpoint.

use serde::Serialize;

use crate::domain::entities::Visit;
use crate::domain::repositories::LinkAnalytics;

/// Click analytics for a single short link.
///
/// ```json
/// { "totalClicks": 2, "analytics": [ { "timestamp": 1700000000000 }, ... ] }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub total_clicks: i64,
    pub analytics: Vec<Visit>,
}

impl From<LinkAnalytics> for AnalyticsResponse {
    fn from(analytics: LinkAnalytics) -> Self {
        Self {
            total_clicks: analytics.total_clicks,
            analytics: analytics.history,
        }
    }
}
