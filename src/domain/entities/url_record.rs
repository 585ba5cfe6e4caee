//! URL record entity stored behind every generated key.

use chrono::{DateTime, Utc};

/// Number of seconds a key stays valid after it was minted (7 days).
pub const EXPIRY_WINDOW_SECS: i64 = 604_800;

/// The original URL a key points to, with the moment the key was created.
///
/// Records are immutable. An expired record is never updated in place: it is
/// removed and replaced by a fresh record under a new key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new record.
    pub fn new(original_url: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            original_url: original_url.into(),
            created_at,
        }
    }

    /// Returns true if more than [`EXPIRY_WINDOW_SECS`] have passed since creation.
    ///
    /// Age is counted in whole seconds, and the boundary is exclusive: a record
    /// exactly 604800 seconds old is still live.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() - self.created_at.timestamp() > EXPIRY_WINDOW_SECS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_record_creation() {
        let record = UrlRecord::new("https://example.com", at(1000));

        assert_eq!(record.original_url, "https://example.com");
        assert_eq!(record.created_at, at(1000));
    }

    #[test]
    fn test_record_live_within_window() {
        let record = UrlRecord::new("https://example.com", at(1000));
        assert!(!record.is_expired_at(at(1001)));
    }

    #[test]
    fn test_record_not_expired_at_exact_boundary() {
        let record = UrlRecord::new("https://example.com", at(1000));
        assert!(!record.is_expired_at(at(1000 + EXPIRY_WINDOW_SECS)));
    }

    #[test]
    fn test_record_expired_one_second_after_boundary() {
        let record = UrlRecord::new("https://example.com", at(1000));
        assert!(record.is_expired_at(at(1001 + EXPIRY_WINDOW_SECS)));
    }

    #[test]
    fn test_record_boundary_ignores_subsecond_part() {
        let created = Utc.timestamp_opt(1000, 100_000_000).unwrap();
        let record = UrlRecord::new("https://example.com", created);

        let boundary = Utc
            .timestamp_opt(1000 + EXPIRY_WINDOW_SECS, 900_000_000)
            .unwrap();
        assert!(!record.is_expired_at(boundary));

        let past = Utc
            .timestamp_opt(1001 + EXPIRY_WINDOW_SECS, 0)
            .unwrap();
        assert!(record.is_expired_at(past));
    }
}
