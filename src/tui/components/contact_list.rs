//! # Contact List Component
//!
//! The sidebar `<nav>`: one line per contact, styled by link state.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ContactListState` lives in `TuiState` (keyboard selection)
//! - `ContactList` is created each frame with borrowed state and the
//!   current `RootView` entries as props

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::contact::FAVORITE_GLYPH;
use crate::core::navigation::LinkState;
use crate::core::view::{ContactEntry, EntryLabel};
use crate::tui::event::TuiEvent;

/// Persistent selection state for the contact list.
#[derive(Default)]
pub struct ContactListState {
    pub selected: Option<usize>,
    pub list_state: ListState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// Follow the link at the selection.
    Open(String),
}

impl ContactListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the selection inside a list that may have shrunk.
    pub fn clamp(&mut self, len: usize) {
        self.selected = match (self.selected, len) {
            (_, 0) => None,
            (Some(i), n) => Some(i.min(n - 1)),
            (None, _) => None,
        };
        self.list_state.select(self.selected);
    }

    pub fn handle_event(&mut self, event: &TuiEvent, entries: &[ContactEntry]) -> Option<ListEvent> {
        if entries.is_empty() {
            self.clamp(0);
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.selected = Some(self.selected.map_or(entries.len() - 1, |i| i.saturating_sub(1)));
                self.list_state.select(self.selected);
                None
            }
            TuiEvent::CursorDown => {
                self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(entries.len() - 1)));
                self.list_state.select(self.selected);
                None
            }
            TuiEvent::Submit => self
                .selected
                .and_then(|i| entries.get(i))
                .map(|entry| ListEvent::Open(entry.href.clone())),
            _ => None,
        }
    }
}

/// Transient render wrapper for the contact list.
pub struct ContactList<'a> {
    state: &'a mut ContactListState,
    entries: &'a [ContactEntry],
}

impl<'a> ContactList<'a> {
    pub fn new(state: &'a mut ContactListState, entries: &'a [ContactEntry]) -> Self {
        Self { state, entries }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));

        if self.entries.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "No contacts",
                Style::default().add_modifier(Modifier::ITALIC),
            ))
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.state.clamp(self.entries.len());
        let width = area.width as usize;
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| ListItem::new(entry_line(entry, width)))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

fn link_style(link: LinkState) -> Style {
    match link {
        LinkState::Active => Style::default().fg(Color::White).bg(Color::Blue),
        LinkState::Pending => Style::default().fg(Color::Blue).add_modifier(Modifier::SLOW_BLINK),
        LinkState::Inactive => Style::default(),
    }
}

fn entry_line(entry: &ContactEntry, width: usize) -> Line<'static> {
    let style = link_style(entry.link);
    let star_width = if entry.favorite { 2 } else { 0 };
    let name = truncate_str(entry.name(), width.saturating_sub(star_width));
    let name_style = match entry.label {
        EntryLabel::Named(_) => style,
        EntryLabel::NoName => style.add_modifier(Modifier::ITALIC),
    };
    let mut spans = vec![Span::styled(name, name_style)];
    if entry.favorite {
        spans.push(Span::styled(format!(" {}", FAVORITE_GLYPH), style.fg(Color::Yellow)));
    }
    Line::from(spans)
}

/// Cut `s` to at most `max` display columns, ending with `…` when cut.
fn truncate_str(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
