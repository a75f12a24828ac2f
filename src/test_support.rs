//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::time::Duration;

use crate::core::contact::Contact;
use crate::core::page::{PageData, RootData};
use crate::core::state::App;

/// Creates a test App that submits a search on every keystroke.
pub fn test_app() -> App {
    App::new(Duration::ZERO)
}

pub fn test_app_with_debounce(debounce: Duration) -> App {
    App::new(debounce)
}

/// Three contacts: a named favorite, a named one, and one without a last name.
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: "1".to_string(),
            first: Some("Ann".to_string()),
            last: Some("Lee".to_string()),
            favorite: true,
            created_at: 1,
            ..Default::default()
        },
        Contact {
            id: "2".to_string(),
            first: Some("Bo".to_string()),
            last: Some("Diaz".to_string()),
            created_at: 2,
            ..Default::default()
        },
        Contact {
            id: "3".to_string(),
            first: Some("Cy".to_string()),
            created_at: 3,
            ..Default::default()
        },
    ]
}

pub fn sample_page() -> PageData {
    PageData {
        root: RootData {
            contacts: sample_contacts(),
            q: None,
        },
        detail: None,
    }
}
