//! In-process implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Link, NewLink, Visit};
use crate::domain::repositories::{LinkAnalytics, LinkRepository, ResolvedLink};
use crate::error::AppError;

struct StoredLink {
    link: Link,
    history: Vec<Visit>,
}

/// Repository keeping mapping records in a process-local map.
///
/// Selected with `STORAGE_BACKEND=memory` and used by the HTTP tests. Records
/// are lost when the process exits. Appending a visit happens under the write
/// lock, so concurrent visits are never lost.
pub struct MemoryLinkRepository {
    links: RwLock<HashMap<String, StoredLink>>,
    next_id: AtomicI64,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        debug!("Using in-memory link store");
        Self {
            links: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.write().await;

        if links.contains_key(&new_link.identifier) {
            return Err(AppError::DuplicateIdentifier(new_link.identifier));
        }

        let link = Link::new(
            self.next_id.fetch_add(1, Ordering::Relaxed),
            new_link.identifier,
            new_link.target_url,
            Utc::now(),
        );

        links.insert(
            link.identifier.clone(),
            StoredLink {
                link: link.clone(),
                history: Vec::new(),
            },
        );

        Ok(link)
    }

    async fn record_visit(&self, identifier: &str) -> Result<Option<ResolvedLink>, AppError> {
        let mut links = self.links.write().await;

        Ok(links.get_mut(identifier).map(|stored| {
            // Stamped under the write lock; the clock may step back, history may not.
            let now = Visit::now();
            let visit = match stored.history.last() {
                Some(last) if last.timestamp > now.timestamp => *last,
                _ => now,
            };
            stored.history.push(visit);
            ResolvedLink {
                identifier: stored.link.identifier.clone(),
                target_url: stored.link.target_url.clone(),
                visit,
                total_clicks: stored.history.len() as i64,
            }
        }))
    }

    async fn find_with_history(
        &self,
        identifier: &str,
    ) -> Result<Option<LinkAnalytics>, AppError> {
        let links = self.links.read().await;

        Ok(links
            .get(identifier)
            .map(|stored| LinkAnalytics::new(stored.link.clone(), stored.history.clone())))
    }

    async fn count_links(&self) -> Result<i64, AppError> {
        Ok(self.links.read().await.len() as i64)
    }

    async fn count_visits(&self) -> Result<i64, AppError> {
        let links = self.links.read().await;
        Ok(links.values().map(|s| s.history.len() as i64).sum())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
