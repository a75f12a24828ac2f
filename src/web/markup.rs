//! HTML rendering of the page shell.
//!
//! Pure string building from a `RootView`. No templates, no scripts.

use std::fmt::Write;

use crate::core::contact::{Contact, FAVORITE_GLYPH};
use crate::core::navigation::LinkState;
use crate::core::view::{ContactEntry, Detail, EntryLabel, RootView};

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_page(view: &RootView) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\" />\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
    html.push_str("<title>Contacts</title>\n</head>\n<body>\n");
    render_sidebar(&mut html, view);
    render_detail(&mut html, view);
    html.push_str("</body>\n</html>\n");
    html
}

/// Generic page for store failures. Never echoes the error itself.
pub fn render_error_page() -> String {
    String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\" /><title>Error</title></head>\n\
         <body><div id=\"error-page\"><h1>Oops!</h1><p>Sorry, an unexpected error has occurred.</p></div></body>\n</html>\n",
    )
}

fn render_sidebar(html: &mut String, view: &RootView) {
    html.push_str("<div id=\"sidebar\">\n<h1>Remix Contacts</h1>\n<div>\n");
    html.push_str("<form id=\"search-form\" role=\"search\" action=\"/\">\n");
    let _ = writeln!(
        html,
        "<input id=\"q\" aria-label=\"Search contacts\" placeholder=\"Search\" type=\"search\" name=\"q\" value=\"{}\"{} />",
        escape(&view.search_value),
        if view.searching { " class=\"loading\"" } else { "" },
    );
    let _ = writeln!(
        html,
        "<div id=\"search-spinner\" aria-hidden{}></div>",
        if view.searching { "" } else { " hidden" },
    );
    html.push_str("<div class=\"sr-only\" aria-live=\"polite\"></div>\n</form>\n");
    html.push_str("<form method=\"post\" action=\"/\">\n<button type=\"submit\">New</button>\n</form>\n");
    html.push_str("</div>\n<nav>\n");

    if view.is_empty() {
        html.push_str("<p><i>No contacts</i></p>\n");
    } else {
        html.push_str("<ul>\n");
        for entry in &view.entries {
            render_entry(html, entry);
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</nav>\n</div>\n");
}

fn render_entry(html: &mut String, entry: &ContactEntry) {
    let class = match entry.link {
        LinkState::Inactive => String::new(),
        state => format!(" class=\"{}\"", state.class_name()),
    };
    let label = match &entry.label {
        EntryLabel::Named(name) => escape(name),
        EntryLabel::NoName => format!("<i>{}</i>", escape(entry.name())),
    };
    let star = if entry.favorite {
        format!(" <span>{}</span>", FAVORITE_GLYPH)
    } else {
        String::new()
    };
    let _ = writeln!(
        html,
        "<li><a href=\"{}\"{}>{}{}</a></li>",
        escape(&entry.href),
        class,
        label,
        star
    );
}

fn render_detail(html: &mut String, view: &RootView) {
    let _ = writeln!(
        html,
        "<div id=\"detail\"{}>",
        if view.detail_loading { " class=\"loading\"" } else { "" },
    );
    match &view.detail {
        Detail::Index => {
            html.push_str("<p id=\"index-page\">This is a demo contacts app.</p>\n");
        }
        Detail::Contact { contact, editing } => render_contact(html, contact, *editing),
        Detail::NotFound => {
            html.push_str("<div id=\"not-found\"><h1>Not Found</h1></div>\n");
        }
    }
    html.push_str("</div>\n");
}

fn render_contact(html: &mut String, contact: &Contact, editing: bool) {
    let mode = if editing { "edit" } else { "view" };
    let _ = writeln!(html, "<div id=\"contact\" data-mode=\"{}\">", mode);
    if let Some(avatar) = contact.avatar.as_deref().filter(|a| !a.is_empty()) {
        let _ = writeln!(html, "<div><img alt=\"\" src=\"{}\" /></div>", escape(avatar));
    }
    html.push_str("<div>\n<h1>");
    match contact.full_name() {
        Some(name) => html.push_str(&escape(&name)),
        None => html.push_str("<i>No Name</i>"),
    }
    if contact.favorite {
        let _ = write!(html, " <span>{}</span>", FAVORITE_GLYPH);
    }
    html.push_str("</h1>\n");
    if let Some(twitter) = contact.twitter.as_deref().filter(|t| !t.is_empty()) {
        let handle = twitter.trim_start_matches('@');
        let _ = writeln!(
            html,
            "<p><a href=\"https://twitter.com/{}\">{}</a></p>",
            escape(handle),
            escape(twitter)
        );
    }
    if let Some(notes) = contact.notes.as_deref().filter(|n| !n.is_empty()) {
        let _ = writeln!(html, "<p>{}</p>", escape(notes));
    }
    if !editing {
        let _ = writeln!(html, "<a href=\"{}\">Edit</a>", escape(&contact.edit_href()));
    }
    html.push_str("</div>\n</div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::location::Location;
    use crate::core::navigation::Navigation;
    use crate::core::page::{PageData, RootData};

    fn view_of(contacts: Vec<Contact>, current: &Location, nav: &Navigation, q: &str) -> RootView {
        let data = PageData {
            root: RootData { contacts, q: None },
            detail: None,
        };
        RootView::derive(&data, current, nav, q)
    }

    fn named(id: &str, first: &str, favorite: bool) -> Contact {
        Contact {
            id: id.to_string(),
            first: Some(first.to_string()),
            favorite,
            ..Default::default()
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_shell_contract() {
        let html = render_page(&view_of(vec![], &Location::root(), &Navigation::Idle, ""));
        assert!(html.contains("<div id=\"sidebar\">"));
        assert!(html.contains("<form id=\"search-form\" role=\"search\" action=\"/\">"));
        assert!(html.contains("id=\"q\" aria-label=\"Search contacts\""));
        assert!(html.contains("name=\"q\" value=\"\""));
        assert!(html.contains("<div id=\"search-spinner\" aria-hidden hidden></div>"));
        assert!(html.contains("<form method=\"post\" action=\"/\">"));
        assert!(html.contains("<button type=\"submit\">New</button>"));
        assert!(html.contains("<p><i>No contacts</i></p>"));
        assert!(!html.contains("<ul>"));
        assert!(html.contains("<div id=\"detail\">"));
    }

    #[test]
    fn test_entries_and_star() {
        let contacts = vec![named("1", "Ann", true), Contact::default()];
        let html = render_page(&view_of(contacts, &Location::root(), &Navigation::Idle, ""));
        assert!(html.contains("<li><a href=\"/contacts/1\">Ann <span>★</span></a></li>"));
        assert!(html.contains("<li><a href=\"/contacts/\"><i>No Name</i></a></li>"));
    }

    #[test]
    fn test_searching_shows_spinner_and_keeps_detail_bright() {
        let nav = Navigation::Loading {
            location: Location::search("an"),
        };
        let html = render_page(&view_of(vec![], &Location::root(), &nav, "an"));
        assert!(html.contains("<div id=\"search-spinner\" aria-hidden></div>"));
        assert!(html.contains("value=\"an\" class=\"loading\""));
        assert!(html.contains("<div id=\"detail\">"));
    }

    #[test]
    fn test_link_navigation_dims_detail_and_marks_pending() {
        let nav = Navigation::Loading {
            location: Location::new("/contacts/1"),
        };
        let html = render_page(&view_of(vec![named("1", "Ann", false)], &Location::root(), &nav, ""));
        assert!(html.contains("<div id=\"detail\" class=\"loading\">"));
        assert!(html.contains("<a href=\"/contacts/1\" class=\"pending\">Ann</a>"));
    }

    #[test]
    fn test_search_value_is_escaped() {
        let html = render_page(&view_of(vec![], &Location::root(), &Navigation::Idle, "\"><b>"));
        assert!(html.contains("value=\"&quot;&gt;&lt;b&gt;\""));
    }
}
