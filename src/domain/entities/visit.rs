//! Visit event recorded on every successful redirect.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A single redirect occurrence.
///
/// `timestamp` is the visit instant in epoch milliseconds. The serialized form
/// (`{"timestamp": 1700000000000}`) is both the stored shape inside a record's
/// visit history and the shape returned by the analytics endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub timestamp: i64,
}

impl Visit {
    pub fn new(timestamp: i64) -> Self {
        Self { timestamp }
    }

    /// A visit stamped with the current wall-clock time.
    pub fn now() -> Self {
        Self::new(Utc::now().timestamp_millis())
    }

    /// The visit instant as a UTC datetime, if the timestamp is in range.
    pub fn visited_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp).single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_serializes_as_timestamp_object() {
        let visit = Visit::new(1_700_000_000_123);
        let json = serde_json::to_value(visit).unwrap();
        assert_eq!(json, serde_json::json!({ "timestamp": 1_700_000_000_123_i64 }));
    }

    #[test]
    fn test_visit_now_is_recent() {
        let before = Utc::now().timestamp_millis();
        let visit = Visit::now();
        let after = Utc::now().timestamp_millis();

        assert!(visit.timestamp >= before);
        assert!(visit.timestamp <= after);
    }

    #[test]
    fn test_visited_at() {
        let visit = Visit::new(0);
        assert_eq!(visit.visited_at().unwrap().timestamp(), 0);
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let visit: Visit =
            serde_json::from_str(r#"{"timestamp": 42, "_id": "64f0c0ffee"}"#).unwrap();
        assert_eq!(visit.timestamp, 42);
    }
}
