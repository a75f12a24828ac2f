//! # Navigation State
//!
//! The ambient "current navigation" as an explicit value. Everything the
//! views show about in-flight work (search spinner, dimmed detail pane,
//! pending links) is derived from it on every render and never stored on
//! its own, so it cannot drift out of sync.
//!
//! ```text
//!            search / link                    load committed
//!   Idle ──────────────────────► Loading ─────────────────────► Idle
//!     │                            ▲
//!     │ POST (New)                 │ redirect
//!     └──────────► Submitting ─────┘
//! ```

use crate::core::location::{Location, QUERY_PARAM};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Navigation {
    #[default]
    Idle,
    /// A GET navigation whose loader has not answered yet.
    Loading { location: Location },
    /// A POST form submission whose action has not answered yet.
    Submitting { location: Location },
}

impl Navigation {
    /// Where the in-flight navigation is headed, if there is one.
    pub fn location(&self) -> Option<&Location> {
        match self {
            Navigation::Idle => None,
            Navigation::Loading { location } | Navigation::Submitting { location } => {
                Some(location)
            }
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Navigation::Idle)
    }

    /// True while a search is in flight: the target carries a `q` parameter.
    pub fn is_searching(&self) -> bool {
        self.location()
            .is_some_and(|location| location.has_param(QUERY_PARAM))
    }

    /// True while the detail pane should be dimmed: loading for any reason
    /// other than a live search.
    pub fn detail_loading(&self) -> bool {
        matches!(self, Navigation::Loading { .. }) && !self.is_searching()
    }
}

/// Highlight state of one link in the sidebar. Exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkState {
    /// The link points at (or above) the location being viewed.
    Active,
    /// The link points at the target of the in-flight navigation.
    Pending,
    #[default]
    Inactive,
}

impl LinkState {
    pub fn derive(to: &str, current: &Location, navigation: &Navigation) -> Self {
        if current.path_matches(to) {
            LinkState::Active
        } else if navigation
            .location()
            .is_some_and(|target| target.path_matches(to))
        {
            LinkState::Pending
        } else {
            LinkState::Inactive
        }
    }

    /// CSS class name used by the HTML markup.
    pub fn class_name(&self) -> &'static str {
        match self {
            LinkState::Active => "active",
            LinkState::Pending => "pending",
            LinkState::Inactive => "",
        }
    }
}
