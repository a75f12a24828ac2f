//! # Application State
//!
//! Client-side state of the contacts app. UI-agnostic: the terminal
//! adapter owns one of these, the HTTP adapter builds views without one.
//!
//! ```text
//! App
//! ├── history: History              // committed locations + cursor
//! ├── data: PageData                // last committed loader data
//! ├── navigation: Navigation        // in-flight navigation, if any
//! ├── pending: Option<Pending..>    // id + history mode of that navigation
//! ├── search: SearchSession         // push-vs-replace policy
//! ├── search_input: String          // text in the search box
//! ├── debounce: Duration            // 0 = submit every keystroke
//! ├── status_message: String        // status bar text
//! └── error: Option<String>         // last failed load/action
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::time::Duration;

use crate::core::history::{History, HistoryMode};
use crate::core::location::Location;
use crate::core::navigation::Navigation;
use crate::core::page::PageData;
use crate::core::search::SearchSession;
use crate::core::view::RootView;

/// Monotonic id of a navigation. Only the newest one may commit.
pub type NavigationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingNavigation {
    pub id: NavigationId,
    pub mode: HistoryMode,
    /// Started by the search box (as opposed to a link, history or a form).
    pub from_search: bool,
}

pub struct App {
    pub history: History,
    pub data: PageData,
    pub navigation: Navigation,
    pub pending: Option<PendingNavigation>,
    pub search: SearchSession,
    pub search_input: String,
    pub debounce: Duration,
    pub status_message: String,
    pub error: Option<String>,
    pub(crate) last_navigation_id: NavigationId,
    pub(crate) debounce_ticket: u64,
}

impl App {
    pub fn new(debounce: Duration) -> Self {
        Self {
            history: History::new(Location::root()),
            data: PageData::default(),
            navigation: Navigation::Idle,
            pending: None,
            search: SearchSession::default(),
            search_input: String::new(),
            debounce,
            status_message: String::from("Welcome to Contacts!"),
            error: None,
            last_navigation_id: 0,
            debounce_ticket: 0,
        }
    }

    /// The committed location being viewed.
    pub fn location(&self) -> &Location {
        self.history.current()
    }

    pub fn is_pending(&self, id: NavigationId) -> bool {
        self.pending.is_some_and(|p| p.id == id)
    }

    pub(crate) fn next_navigation_id(&mut self) -> NavigationId {
        self.last_navigation_id += 1;
        self.last_navigation_id
    }

    pub fn view(&self) -> RootView {
        RootView::derive(&self.data, self.location(), &self.navigation, &self.search_input)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Contacts!");
        assert!(app.navigation.is_idle());
        assert!(app.pending.is_none());
        assert_eq!(app.location().pathname, "/");
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn test_navigation_ids_increase() {
        let mut app = test_app();
        let a = app.next_navigation_id();
        let b = app.next_navigation_id();
        assert!(b > a);
    }
}
