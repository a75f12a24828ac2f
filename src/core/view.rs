//! # Root View Model
//!
//! The page shell reduced to plain data: what the search box shows,
//! whether the spinner spins, which entries the sidebar lists and how
//! each is highlighted, and what the detail pane holds.
//!
//! Both renderers (HTML and terminal) draw from a `RootView` and make no
//! decisions of their own.

use crate::core::contact::{Contact, FAVORITE_GLYPH, NO_NAME};
use crate::core::location::{Location, Route};
use crate::core::navigation::{LinkState, Navigation};
use crate::core::page::PageData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryLabel {
    Named(String),
    /// Rendered as an italic placeholder.
    NoName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEntry {
    pub id: String,
    pub href: String,
    pub label: EntryLabel,
    pub favorite: bool,
    pub link: LinkState,
}

impl ContactEntry {
    pub fn new(contact: &Contact, current: &Location, navigation: &Navigation) -> Self {
        let href = contact.href();
        let link = LinkState::derive(&href, current, navigation);
        Self {
            id: contact.id.clone(),
            label: match contact.full_name() {
                Some(name) => EntryLabel::Named(name),
                None => EntryLabel::NoName,
            },
            favorite: contact.favorite,
            href,
            link,
        }
    }

    pub fn name(&self) -> &str {
        match &self.label {
            EntryLabel::Named(name) => name,
            EntryLabel::NoName => NO_NAME,
        }
    }

    /// Plain-text label, star included: `"Ann ★"`.
    pub fn text(&self) -> String {
        if self.favorite {
            format!("{} {}", self.name(), FAVORITE_GLYPH)
        } else {
            self.name().to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    /// Nothing selected.
    Index,
    Contact { contact: Contact, editing: bool },
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootView {
    pub search_value: String,
    pub searching: bool,
    pub detail_loading: bool,
    pub entries: Vec<ContactEntry>,
    pub detail: Detail,
}

impl RootView {
    pub fn derive(
        data: &PageData,
        current: &Location,
        navigation: &Navigation,
        search_value: &str,
    ) -> Self {
        let entries = data
            .root
            .contacts
            .iter()
            .map(|contact| ContactEntry::new(contact, current, navigation))
            .collect();

        let detail = match (current.route(), &data.detail) {
            (Route::Index, _) => Detail::Index,
            (Route::Contact(_), Some(contact)) => Detail::Contact {
                contact: contact.clone(),
                editing: false,
            },
            (Route::EditContact(_), Some(contact)) => Detail::Contact {
                contact: contact.clone(),
                editing: true,
            },
            (Route::Contact(_) | Route::EditContact(_), None) | (Route::NotFound, _) => {
                Detail::NotFound
            }
        };

        Self {
            search_value: search_value.to_string(),
            searching: navigation.is_searching(),
            detail_loading: navigation.detail_loading(),
            entries,
            detail,
        }
    }

    /// True when the sidebar should show the "No contacts" placeholder.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::page::RootData;

    fn contact(id: &str, first: &str, last: &str, favorite: bool) -> Contact {
        Contact {
            id: id.to_string(),
            first: Some(first.to_string()),
            last: Some(last.to_string()),
            favorite,
            ..Default::default()
        }
    }

    fn page(contacts: Vec<Contact>) -> PageData {
        PageData {
            root: RootData { contacts, q: None },
            detail: None,
        }
    }

    #[test]
    fn test_named_favorite_and_unnamed_entries() {
        let data = page(vec![contact("1", "Ann", "", true), contact("2", "", "", false)]);
        let view = RootView::derive(&data, &Location::root(), &Navigation::Idle, "");
        assert_eq!(view.entries.len(), 2);
        assert_eq!(view.entries[0].text(), "Ann ★");
        assert_eq!(view.entries[0].label, EntryLabel::Named("Ann".into()));
        assert_eq!(view.entries[1].label, EntryLabel::NoName);
        assert_eq!(view.entries[1].text(), "No Name");
    }

    #[test]
    fn test_empty_collection() {
        let view = RootView::derive(&page(vec![]), &Location::root(), &Navigation::Idle, "");
        assert!(view.is_empty());
    }

    #[test]
    fn test_flags_follow_navigation() {
        let data = page(vec![]);
        let search = Navigation::Loading {
            location: Location::search("a"),
        };
        let view = RootView::derive(&data, &Location::root(), &search, "a");
        assert!(view.searching);
        assert!(!view.detail_loading);

        let link = Navigation::Loading {
            location: Location::new("/contacts/1"),
        };
        let view = RootView::derive(&data, &Location::root(), &link, "");
        assert!(!view.searching);
        assert!(view.detail_loading);
    }

    #[test]
    fn test_detail_follows_route() {
        let ann = contact("1", "Ann", "Lee", false);
        let mut data = page(vec![ann.clone()]);
        data.detail = Some(ann.clone());

        let view = RootView::derive(&data, &Location::new("/contacts/1/edit"), &Navigation::Idle, "");
        assert_eq!(view.detail, Detail::Contact { contact: ann, editing: true });
        assert_eq!(view.entries[0].link, LinkState::Active);

        data.detail = None;
        let view = RootView::derive(&data, &Location::new("/contacts/9"), &Navigation::Idle, "");
        assert_eq!(view.detail, Detail::NotFound);

        let view = RootView::derive(&data, &Location::root(), &Navigation::Idle, "");
        assert_eq!(view.detail, Detail::Index);
    }
}
