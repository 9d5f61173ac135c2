//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink, Visit};
use crate::domain::repositories::{LinkAnalytics, LinkRepository, ResolvedLink};
use crate::error::AppError;

/// PostgreSQL repository for mapping records.
///
/// The visit history is stored as a JSONB array on the record itself, so a
/// visit is appended with one `UPDATE ... RETURNING`. The row lock taken by the
/// update serializes concurrent visits to the same identifier.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct LinkRow {
    id: i64,
    identifier: String,
    target_url: String,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(r.id, r.identifier, r.target_url, r.created_at)
    }
}

#[derive(FromRow)]
struct LinkHistoryRow {
    id: i64,
    identifier: String,
    target_url: String,
    created_at: DateTime<Utc>,
    visit_history: Json<Vec<Visit>>,
}

#[derive(FromRow)]
struct ResolvedRow {
    identifier: String,
    target_url: String,
    visited_at: i64,
    total_clicks: i64,
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (identifier, target_url)
            VALUES ($1, $2)
            RETURNING id, identifier, target_url, created_at
            "#,
        )
        .bind(&new_link.identifier)
        .bind(&new_link.target_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn record_visit(&self, identifier: &str) -> Result<Option<ResolvedLink>, AppError> {
        // clock_timestamp() is read after the row lock is taken. GREATEST keeps
        // the history ordered if the server clock steps back.
        let row = sqlx::query_as::<_, ResolvedRow>(
            r#"
            UPDATE links
            SET visit_history = visit_history || jsonb_build_array(jsonb_build_object(
                'timestamp',
                GREATEST(
                    (extract(epoch FROM clock_timestamp()) * 1000)::bigint,
                    COALESCE((visit_history -> -1 ->> 'timestamp')::bigint, 0)
                )
            ))
            WHERE identifier = $1
            RETURNING
                identifier,
                target_url,
                (visit_history -> -1 ->> 'timestamp')::bigint AS visited_at,
                jsonb_array_length(visit_history)::bigint AS total_clicks
            "#,
        )
        .bind(identifier)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| ResolvedLink {
            identifier: r.identifier,
            target_url: r.target_url,
            visit: Visit::new(r.visited_at),
            total_clicks: r.total_clicks,
        }))
    }

    async fn find_with_history(
        &self,
        identifier: &str,
    ) -> Result<Option<LinkAnalytics>, AppError> {
        let row = sqlx::query_as::<_, LinkHistoryRow>(
            r#"
            SELECT id, identifier, target_url, created_at, visit_history
            FROM links
            WHERE identifier = $1
            "#,
        )
        .bind(identifier)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| {
            let link = Link::new(r.id, r.identifier, r.target_url, r.created_at);
            LinkAnalytics::new(link, r.visit_history.0)
        }))
    }

    async fn count_links(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn count_visits(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(jsonb_array_length(visit_history)), 0)::bigint FROM links",
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
