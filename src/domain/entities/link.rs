//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping between a short identifier and its target URL.
///
/// Neither `identifier` nor `target_url` changes after creation. Visits are
/// tracked separately in the record's history (see [`super::Visit`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub identifier: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, identifier: String, target_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            identifier,
            target_url,
            created_at,
        }
    }
}

/// Input data for creating a new link. The visit history starts empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub identifier: String,
    pub target_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "AbC12xyz".to_string(),
            "https://example.com/a/b".to_string(),
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.identifier, "AbC12xyz");
        assert_eq!(link.target_url, "https://example.com/a/b");
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink {
            identifier: "xyz78901".to_string(),
            target_url: "https://rust-lang.org".to_string(),
        };

        assert_eq!(new_link.identifier, "xyz78901");
        assert_eq!(new_link.target_url, "https://rust-lang.org");
    }
}
