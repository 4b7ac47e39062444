//! Bulletin-board post model and feed ordering.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single bulletin-board post as stored in the published feed.
///
/// Posts are created by the upstream ingestion job and are immutable here.
/// Unknown fields (the ingestion job adds an `id`, for example) are ignored,
/// and `trip_key` defaults to empty since older records may omit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub user_id: String,
    #[serde(default)]
    pub trip_key: String,
    pub body: String,
    /// ISO-8601 timestamp, kept verbatim as produced upstream.
    pub timestamp: String,
}

impl Post {
    /// Parse the stored timestamp.
    ///
    /// Accepts RFC 3339 and the bare `YYYY-MM-DDTHH:MM:SS` form. Returns
    /// `None` for anything else; such posts sort as oldest.
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.timestamp) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&self.timestamp, "%Y-%m-%dT%H:%M:%S")
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// Human-readable timestamp for display, falling back to the raw string
    /// when it cannot be parsed.
    pub fn display_timestamp(&self) -> String {
        match self.parsed_timestamp() {
            Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
            None => self.timestamp.clone(),
        }
    }
}

/// Sort posts newest-first.
///
/// The sort is stable, so posts with equal (or equally unparseable)
/// timestamps keep their relative order from the feed.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.parsed_timestamp().cmp(&a.parsed_timestamp()));
}

/// The payload submitted to the issue tracker for a new post.
///
/// Serialized with `to_json` this is the canonical issue body the ingestion
/// job parses on the other side; field order matters only for readability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPayload {
    pub user_id: String,
    pub trip_key: String,
    pub body: String,
}

impl PostPayload {
    /// Serialize to the canonical JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(user_id: &str, timestamp: &str) -> Post {
        Post {
            user_id: user_id.to_string(),
            trip_key: "key".to_string(),
            body: "hello".to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn test_sort_newest_first() {
        let mut posts = vec![
            post("t1", "2024-01-01T00:00:00Z"),
            post("t2", "2024-06-01T00:00:00Z"),
            post("t3", "2024-03-01T00:00:00Z"),
        ];
        sort_newest_first(&mut posts);
        let order: Vec<&str> = posts.iter().map(|p| p.user_id.as_str()).collect();
        assert_eq!(order, vec!["t2", "t3", "t1"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_timestamps() {
        let mut posts = vec![
            post("first", "2024-05-01T12:00:00Z"),
            post("second", "2024-05-01T12:00:00Z"),
            post("third", "2024-05-01T12:00:00Z"),
        ];
        sort_newest_first(&mut posts);
        let order: Vec<&str> = posts.iter().map(|p| p.user_id.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_unparseable_timestamps_sort_last() {
        let mut posts = vec![
            post("bad", "not-a-date"),
            post("good", "2024-01-01T00:00:00Z"),
        ];
        sort_newest_first(&mut posts);
        assert_eq!(posts[0].user_id, "good");
        assert_eq!(posts[1].user_id, "bad");
    }

    #[test]
    fn test_parses_naive_timestamp() {
        let p = post("a", "2024-02-03T04:05:06");
        assert!(p.parsed_timestamp().is_some());
        assert_eq!(p.display_timestamp(), "2024-02-03 04:05");
    }

    #[test]
    fn test_display_timestamp_falls_back_to_raw() {
        let p = post("a", "???");
        assert_eq!(p.display_timestamp(), "???");
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields_and_defaults_trip_key() {
        let json = r#"{
            "id": "3a0f8f2e",
            "timestamp": "2024-01-01T00:00:00+00:00",
            "user_id": "alice",
            "body": "hi"
        }"#;
        let p: Post = serde_json::from_str(json).unwrap();
        assert_eq!(p.user_id, "alice");
        assert_eq!(p.trip_key, "");
    }

    #[test]
    fn test_payload_canonical_json() {
        let payload = PostPayload {
            user_id: "alice".to_string(),
            trip_key: "key1".to_string(),
            body: "hello".to_string(),
        };
        assert_eq!(
            payload.to_json().unwrap(),
            r#"{"user_id":"alice","trip_key":"key1","body":"hello"}"#
        );
    }
}
