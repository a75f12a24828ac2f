//! # Search Session
//!
//! Decides whether a search submission pushes a new history entry or
//! replaces the current one. Typing "ann" should leave one entry behind,
//! not three.
//!
//! ```text
//!                  submit (→ Push)
//!   NoSearchYet ───────────────────► SearchInProgress ──┐
//!        ▲                                  ▲           │ submit (→ Replace)
//!        │                                  └───────────┘
//!        │ commit with q absent or empty,
//!        │ or a link/history/form navigation starts
//!        └──────────────────────────────────────
//! ```

use crate::core::history::HistoryMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchSession {
    /// The previous query was absent or empty; the next submission starts a search.
    #[default]
    NoSearchYet,
    /// A search has been submitted (committed or still in flight).
    SearchInProgress,
}

impl SearchSession {
    /// Session implied by a committed query.
    pub fn from_query(query: Option<&str>) -> Self {
        match query {
            Some(q) if !q.is_empty() => SearchSession::SearchInProgress,
            _ => SearchSession::NoSearchYet,
        }
    }

    /// Record a submission and return how it should land in history.
    pub fn submit(&mut self) -> HistoryMode {
        let mode = match self {
            SearchSession::NoSearchYet => HistoryMode::Push,
            SearchSession::SearchInProgress => HistoryMode::Replace,
        };
        *self = SearchSession::SearchInProgress;
        mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_submission_pushes_then_replaces() {
        let mut session = SearchSession::default();
        assert_eq!(session.submit(), HistoryMode::Push);
        assert_eq!(session.submit(), HistoryMode::Replace);
        assert_eq!(session.submit(), HistoryMode::Replace);
    }

    #[test]
    fn test_from_query() {
        assert_eq!(SearchSession::from_query(None), SearchSession::NoSearchYet);
        assert_eq!(SearchSession::from_query(Some("")), SearchSession::NoSearchYet);
        assert_eq!(SearchSession::from_query(Some("an")), SearchSession::SearchInProgress);
    }
}
