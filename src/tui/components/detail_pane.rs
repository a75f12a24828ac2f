//! # DetailPane Component
//!
//! The `#detail` region. Stateless: `detail` and `loading` are props taken
//! straight from `RootView`. While `loading`, everything is dimmed.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::contact::{Contact, FAVORITE_GLYPH, NO_NAME};
use crate::core::view::Detail;
use crate::tui::component::Component;

pub struct DetailPane<'a> {
    pub detail: &'a Detail,
    pub loading: bool,
    pub error: Option<&'a str>,
}

impl<'a> DetailPane<'a> {
    pub fn new(detail: &'a Detail, loading: bool, error: Option<&'a str>) -> Self {
        Self {
            detail,
            loading,
            error,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = match self.detail {
            Detail::Index => vec![
                Line::from("This is a demo contacts app."),
                Line::from(""),
                Line::from("Type to search. ↑/↓ and Enter open a contact."),
                Line::from("Ctrl+N creates one, Alt+←/→ walk history."),
            ],
            Detail::NotFound => vec![Line::from(Span::styled(
                "Not Found",
                Style::default().add_modifier(Modifier::BOLD),
            ))],
            Detail::Contact { contact, editing } => contact_lines(contact, *editing),
        };
        if let Some(error) = self.error {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Error: {error}"),
                Style::default().fg(Color::Red),
            )));
        }
        lines
    }
}

fn contact_lines(contact: &Contact, editing: bool) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut heading = match contact.full_name() {
        Some(name) => vec![Span::styled(name, bold)],
        None => vec![Span::styled(NO_NAME, bold.add_modifier(Modifier::ITALIC))],
    };
    if contact.favorite {
        heading.push(Span::styled(
            format!(" {}", FAVORITE_GLYPH),
            Style::default().fg(Color::Yellow),
        ));
    }

    let mut lines = vec![Line::from(heading)];
    if let Some(twitter) = contact.twitter.as_deref().filter(|t| !t.is_empty()) {
        lines.push(Line::from(Span::styled(
            twitter.to_string(),
            Style::default().fg(Color::Cyan),
        )));
    }
    if let Some(avatar) = contact.avatar.as_deref().filter(|a| !a.is_empty()) {
        lines.push(Line::from(Span::styled(
            avatar.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if let Some(notes) = contact.notes.as_deref().filter(|n| !n.is_empty()) {
        lines.push(Line::from(""));
        lines.push(Line::from(notes.to_string()));
    }
    if editing {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Editing",
            Style::default().fg(Color::Green),
        )));
    }
    lines
}

impl Component for DetailPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut style = Style::default();
        if self.loading {
            style = style.add_modifier(Modifier::DIM);
        }
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style);
        let paragraph = Paragraph::new(self.lines())
            .style(style)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(pane: &mut DetailPane) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(50, 10)).unwrap();
        terminal.draw(|f| pane.render(f, f.area())).unwrap();
        terminal
    }

    fn text(terminal: &Terminal<TestBackend>) -> String {
        terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_contact_detail() {
        let detail = Detail::Contact {
            contact: Contact {
                id: "1".into(),
                first: Some("Ann".into()),
                last: Some("Lee".into()),
                twitter: Some("@ann".into()),
                favorite: true,
                ..Default::default()
            },
            editing: true,
        };
        let terminal = draw(&mut DetailPane::new(&detail, false, None));
        let text = text(&terminal);
        assert!(text.contains("Ann Lee ★"));
        assert!(text.contains("@ann"));
        assert!(text.contains("Editing"));
    }

    #[test]
    fn test_loading_dims_content() {
        let detail = Detail::Index;
        let terminal = draw(&mut DetailPane::new(&detail, true, None));
        let cell = &terminal.backend().buffer()[(1, 1)];
        assert!(cell.modifier.contains(Modifier::DIM));

        let terminal = draw(&mut DetailPane::new(&detail, false, None));
        let cell = &terminal.backend().buffer()[(1, 1)];
        assert!(!cell.modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_not_found_and_error() {
        let detail = Detail::NotFound;
        let terminal = draw(&mut DetailPane::new(&detail, false, Some("store offline")));
        let text = text(&terminal);
        assert!(text.contains("Not Found"));
        assert!(text.contains("Error: store offline"));
    }
}
