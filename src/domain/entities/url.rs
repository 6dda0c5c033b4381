//! Url entity representing a short identifier mapping.

use chrono::{DateTime, Utc};

/// A mapping from a short identifier to its destination URL.
///
/// `id` is either derived from `destination` or supplied by the caller as an
/// alias. `created` is assigned once at creation and never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    pub id: String,
    pub destination: String,
    pub created: DateTime<Utc>,
}

impl Url {
    /// Creates a new Url instance.
    pub fn new(id: String, destination: String, created: DateTime<Utc>) -> Self {
        Self {
            id,
            destination,
            created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_creation() {
        let now = Utc::now();
        let url = Url::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            now,
        );

        assert_eq!(url.id, "abc123");
        assert_eq!(url.destination, "https://example.com");
        assert_eq!(url.created, now);
    }
}
