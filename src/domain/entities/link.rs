//! Link entity representing an alias to URL mapping.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// Links have no update path: a record is either present or absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub alias: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, alias: String, target_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            alias,
            target_url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub alias: String,
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
            "abc123".to_string(),
            "https://example.com".to_string(),
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.alias, "abc123");
        assert_eq!(link.target_url, "https://example.com");
        assert_eq!(link.created_at, now);
    }
}
