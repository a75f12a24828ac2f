//! Loader and action outputs, shared by every adapter.

use crate::core::contact::Contact;
use crate::core::location::Location;

/// What the root loader hands the root view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RootData {
    pub contacts: Vec<Contact>,
    /// The `q` parameter as received, echoed back for the search box.
    pub q: Option<String>,
}

/// Everything needed to render one location: the root layout's data plus
/// the contact shown in the detail pane, when the route has one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageData {
    pub root: RootData,
    pub detail: Option<Contact>,
}

/// An action's answer: go here next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub location: Location,
}

impl Redirect {
    pub fn to(location: Location) -> Self {
        Self { location }
    }
}
