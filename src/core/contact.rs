//! # Contact Records
//!
//! The one domain record of the app. Stores hand these out; views only
//! ever read them.

use serde::{Deserialize, Serialize};

/// Star appended to favorite contacts in every rendering.
pub const FAVORITE_GLYPH: &str = "★";

/// Placeholder shown (in italics) for a contact with no first or last name.
pub const NO_NAME: &str = "No Name";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Contact {
    pub id: String,
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub favorite: bool,
    /// Unix milliseconds, assigned by the store on creation.
    #[serde(default, rename = "createdAt")]
    pub created_at: i64,
}

impl Contact {
    /// A blank record: everything empty except the id and creation time.
    pub fn empty(id: String, created_at: i64) -> Self {
        Self {
            id,
            created_at,
            ..Default::default()
        }
    }

    /// Path of this contact's detail view.
    pub fn href(&self) -> String {
        format!("/contacts/{}", self.id)
    }

    /// Path of this contact's edit view.
    pub fn edit_href(&self) -> String {
        format!("/contacts/{}/edit", self.id)
    }

    /// "First Last" with blank parts dropped, or `None` when both are blank.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first.as_deref(), self.last.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Case-insensitive substring match against first or last name.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        [self.first.as_deref(), self.last.as_deref()]
            .into_iter()
            .flatten()
            .any(|name| name.to_lowercase().contains(&needle))
    }
}
