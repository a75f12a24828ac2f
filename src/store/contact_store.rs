use std::cmp::Ordering;
use std::fmt;

use async_trait::async_trait;

use crate::core::contact::Contact;

/// Errors that can occur during store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    Io(std::io::Error),
    /// Stored or received data is not valid contact JSON.
    Parse(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The remote store answered with an error status.
    Api { status: u16, message: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "store I/O error: {e}"),
            StoreError::Parse(msg) => write!(f, "parse error: {msg}"),
            StoreError::Network(msg) => write!(f, "network error: {msg}"),
            StoreError::Api { status, message } => {
                write!(f, "store API error (HTTP {status}): {message}")
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Returns the name of the backend.
    fn name(&self) -> &str;

    /// Contacts matching `query`, sorted for display. `None` and `Some("")`
    /// both return everything.
    async fn search(&self, query: Option<&str>) -> Result<Vec<Contact>, StoreError>;

    /// Creates a blank contact with a fresh id and returns it.
    async fn create_empty(&self) -> Result<Contact, StoreError>;

    /// A single contact, or `None` if the id is unknown.
    async fn get(&self, id: &str) -> Result<Option<Contact>, StoreError>;
}

/// Filter by name and sort: last name, then creation time, unnamed last.
/// Shared by the local backends so they agree on ordering.
pub fn filter_and_sort<'a>(
    contacts: impl IntoIterator<Item = &'a Contact>,
    query: Option<&str>,
) -> Vec<Contact> {
    let query = query.map(str::trim).filter(|q| !q.is_empty());
    let mut matched: Vec<Contact> = contacts
        .into_iter()
        .filter(|c| query.is_none_or(|q| c.matches(q)))
        .cloned()
        .collect();
    matched.sort_by(display_order);
    matched
}

fn display_order(a: &Contact, b: &Contact) -> Ordering {
    let last = |c: &Contact| c.last.clone().filter(|l| !l.trim().is_empty());
    match (last(a), last(b)) {
        (Some(la), Some(lb)) => la.cmp(&lb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then(a.created_at.cmp(&b.created_at))
}

/// Unix milliseconds, the unit of `Contact::created_at`.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Fresh contact id.
pub fn new_contact_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: &str, first: &str, last: Option<&str>, created_at: i64) -> Contact {
        Contact {
            id: id.to_string(),
            first: Some(first.to_string()),
            last: last.map(str::to_string),
            created_at,
            ..Default::default()
        }
    }

    #[test]
    fn test_sorts_by_last_then_created_at_with_unnamed_last() {
        let all = vec![
            contact("1", "Zed", None, 1),
            contact("2", "Ann", Some("Young"), 2),
            contact("3", "Bo", Some("Adams"), 5),
            contact("4", "Cy", Some("Adams"), 3),
        ];
        let ids: Vec<String> = filter_and_sort(&all, None).into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["4", "3", "2", "1"]);
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let all = vec![contact("1", "Ann", None, 1), contact("2", "Bo", None, 2)];
        assert_eq!(filter_and_sort(&all, Some("")).len(), 2);
        assert_eq!(filter_and_sort(&all, Some("  ")).len(), 2);
    }

    #[test]
    fn test_query_filters_case_insensitively() {
        let all = vec![
            contact("1", "Ann", Some("Lee"), 1),
            contact("2", "Bo", Some("Shannon"), 2),
            contact("3", "Cy", None, 3),
        ];
        let ids: Vec<String> = filter_and_sort(&all, Some("AN"))
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert!(filter_and_sort(&all, Some("xyz")).is_empty());
    }

    #[test]
    fn test_error_display() {
        let err = StoreError::Api {
            status: 503,
            message: "down".to_string(),
        };
        assert_eq!(err.to_string(), "store API error (HTTP 503): down");
        assert_eq!(
            StoreError::Parse("expected value".into()).to_string(),
            "parse error: expected value"
        );
    }
}
