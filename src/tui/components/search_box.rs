//! # SearchBox Component
//!
//! Single-line search field. Every edit emits `SearchEvent::Changed` with
//! the whole value; the run loop turns that into a search navigation.
//!
//! The buffer is internal state, but the committed query wins: when a
//! navigation commits, the run loop calls `sync()` with the query of the
//! location now being viewed.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Changed(String),
}

pub struct SearchBox {
    pub buffer: String,
    /// Byte offset into `buffer`.
    cursor: usize,
    /// Prop: a search is in flight.
    pub searching: bool,
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            searching: false,
        }
    }

    /// Replace the buffer with a committed value, cursor at the end.
    pub fn sync(&mut self, value: &str) {
        if self.buffer != value {
            self.buffer = value.to_string();
            self.cursor = self.buffer.len();
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::Changed(self.buffer.clone()))
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.searching { "Search …" } else { "Search" };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(title);

        let inner_width = area.width.saturating_sub(2) as usize;
        let before_cursor = UnicodeWidthStr::width(&self.buffer[..self.cursor]);
        // Scroll horizontally so the cursor stays visible.
        let skip = before_cursor.saturating_sub(inner_width.saturating_sub(1));
        let mut visible = String::new();
        let mut col = 0;
        for c in self.buffer.chars() {
            let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if col >= skip {
                visible.push(c);
            }
            col += w;
        }

        let style = if self.buffer.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green)
        };
        let text = if self.buffer.is_empty() {
            "Search contacts".to_string()
        } else {
            visible
        };
        frame.render_widget(Paragraph::new(text).style(style).block(block), area);

        let cursor_x = area.x + 1 + (before_cursor - skip) as u16;
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                let line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                self.buffer.insert_str(self.cursor, &line);
                self.cursor += line.len();
                self.changed()
            }
            TuiEvent::Backspace if self.cursor > 0 => {
                let prev = self.prev_boundary();
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete if self.cursor < self.buffer.len() => {
                let next = self.next_boundary();
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::Escape if !self.buffer.is_empty() => {
                self.buffer.clear();
                self.cursor = 0;
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = self.prev_boundary();
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = self.next_boundary();
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            _ => None,
        }
    }
}
