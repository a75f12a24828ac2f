//! # Locations and Routes
//!
//! A `Location` is what a navigation targets: a pathname plus ordered
//! query parameters. It round-trips through hrefs like `/contacts/1?q=an`.
//!
//! `Route` is the small route table every view is rendered under:
//!
//! ```text
//! /                     → Index
//! /contacts/:id         → Contact(id)
//! /contacts/:id/edit    → EditContact(id)
//! anything else         → NotFound
//! ```

use std::fmt;

use url::{Url, form_urlencoded};

/// Name of the search query parameter.
pub const QUERY_PARAM: &str = "q";

/// Origin used to resolve relative hrefs. Never rendered.
const PARSE_BASE: &str = "http://contacts.invalid";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
    pub params: Vec<(String, String)>,
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl Location {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            params: Vec::new(),
        }
    }

    pub fn root() -> Self {
        Self::new("/")
    }

    /// Target of a search form submission: `/?q=<query>`.
    pub fn search(query: &str) -> Self {
        Self::root().with_param(QUERY_PARAM, query)
    }

    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.params.push((name.to_string(), value.to_string()));
        self
    }

    /// Parse an absolute or path-relative href.
    pub fn parse(href: &str) -> Result<Self, url::ParseError> {
        let base = Url::parse(PARSE_BASE)?;
        let url = base.join(href)?;
        Ok(Self::from_url(&url))
    }

    pub fn from_url(url: &Url) -> Self {
        Self {
            pathname: url.path().to_string(),
            params: url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }

    /// First value of a query parameter. `?q=` yields `Some("")`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.params.iter().any(|(k, _)| k == name)
    }

    /// The search query carried by this location, if any.
    pub fn query(&self) -> Option<&str> {
        self.param(QUERY_PARAM)
    }

    pub fn href(&self) -> String {
        if self.params.is_empty() {
            return self.pathname.clone();
        }
        let search = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish();
        format!("{}?{}", self.pathname, search)
    }

    /// Link matching: true when this pathname is `to` or lies below it.
    pub fn path_matches(&self, to: &str) -> bool {
        let to = to.trim_end_matches('/');
        if to.is_empty() {
            return self.pathname == "/";
        }
        let path = self.pathname.trim_end_matches('/');
        path == to
            || path
                .strip_prefix(to)
                .is_some_and(|rest| rest.starts_with('/'))
    }

    pub fn route(&self) -> Route {
        Route::resolve(&self.pathname)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Index,
    Contact(String),
    EditContact(String),
    NotFound,
}

impl Route {
    pub fn resolve(pathname: &str) -> Self {
        let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Index,
            ["contacts", id] => Route::Contact((*id).to_string()),
            ["contacts", id, "edit"] => Route::EditContact((*id).to_string()),
            _ => Route::NotFound,
        }
    }

    /// Id of the contact this route shows, if it shows one.
    pub fn contact_id(&self) -> Option<&str> {
        match self {
            Route::Contact(id) | Route::EditContact(id) => Some(id),
            Route::Index | Route::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_and_query() {
        let loc = Location::parse("/contacts/1?q=an").unwrap();
        assert_eq!(loc.pathname, "/contacts/1");
        assert_eq!(loc.query(), Some("an"));
    }

    #[test]
    fn test_empty_query_is_present() {
        let loc = Location::parse("/?q=").unwrap();
        assert!(loc.has_param("q"));
        assert_eq!(loc.query(), Some(""));
    }

    #[test]
    fn test_missing_query_is_none() {
        let loc = Location::parse("/").unwrap();
        assert!(!loc.has_param("q"));
        assert_eq!(loc.query(), None);
    }

    #[test]
    fn test_first_value_wins() {
        let loc = Location::parse("/?q=one&q=two").unwrap();
        assert_eq!(loc.query(), Some("one"));
    }

    #[test]
    fn test_href_encodes_and_parses_back() {
        let loc = Location::search("ann & bo");
        let href = loc.href();
        assert!(href.starts_with("/?q="));
        assert!(!href.contains(' '));
        assert_eq!(Location::parse(&href).unwrap(), loc);
    }

    #[test]
    fn test_relative_href_resolves_from_root() {
        let loc = Location::parse("contacts/7").unwrap();
        assert_eq!(loc.pathname, "/contacts/7");
    }

    #[test]
    fn test_path_matches_self_and_children_only() {
        let edit = Location::new("/contacts/1/edit");
        assert!(edit.path_matches("/contacts/1"));
        assert!(Location::new("/contacts/1").path_matches("/contacts/1"));
        assert!(!Location::new("/contacts/10").path_matches("/contacts/1"));
        assert!(!Location::root().path_matches("/contacts/1"));
    }

    #[test]
    fn test_route_table() {
        assert_eq!(Route::resolve("/"), Route::Index);
        assert_eq!(Route::resolve("/contacts/ab"), Route::Contact("ab".into()));
        assert_eq!(Route::resolve("/contacts/ab/edit"), Route::EditContact("ab".into()));
        assert_eq!(Route::resolve("/contacts"), Route::NotFound);
        assert_eq!(Route::resolve("/nope/1"), Route::NotFound);
        assert_eq!(Route::EditContact("ab".into()).contact_id(), Some("ab"));
    }
}
