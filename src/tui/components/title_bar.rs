//! # TitleBar Component
//!
//! Top status bar: the committed location, the status message, and a
//! spinner while a search is in flight.
//!
//! Stateless. All three fields are props:
//! - `href`: core history (the location being viewed)
//! - `status_message`: core App state
//! - `spinner`: `Some(frame)` while `RootView::searching`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TitleBar {
    pub href: String,
    pub status_message: String,
    /// Animation frame of the search spinner, `None` when not searching.
    pub spinner: Option<usize>,
}

impl TitleBar {
    pub fn new(href: String, status_message: String, spinner: Option<usize>) -> Self {
        Self {
            href,
            status_message,
            spinner,
        }
    }

    fn text(&self) -> String {
        let mut text = format!("Contacts ({})", self.href);
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if let Some(frame) = self.spinner {
            text.push_str(" | ");
            text.push_str(SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]);
            text.push_str(" Searching");
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_while_searching() {
        let mut title_bar = TitleBar::new("/?q=an".to_string(), "3 contacts".to_string(), Some(0));
        let text = rendered(&mut title_bar);
        assert!(text.contains("Contacts (/?q=an)"));
        assert!(text.contains("3 contacts"));
        assert!(text.contains("Searching"));
    }

    #[test]
    fn test_title_bar_idle_without_status() {
        let mut title_bar = TitleBar::new("/".to_string(), "".to_string(), None);
        let text = rendered(&mut title_bar);
        assert!(text.contains("Contacts (/)"));
        assert!(!text.contains('|'));
        assert!(!text.contains("Searching"));
    }
}
