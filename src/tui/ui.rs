use crate::core::state::App;
use crate::core::view::RootView;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ContactList, DetailPane, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// Width of the sidebar column.
const SIDEBAR_WIDTH: u16 = 32;

const HELP_TEXT: &str =
    " type to search · ↑/↓ Enter open · Ctrl+N new · Alt+←/→ history · Ctrl+R reload · Ctrl+C quit";

pub fn draw_ui(frame: &mut Frame, app: &App, view: &RootView, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [title_area, body_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
    let [sidebar_area, detail_area] =
        Layout::horizontal([Length(SIDEBAR_WIDTH), Min(0)]).areas(body_area);
    let [search_area, list_area] = Layout::vertical([Length(3), Min(0)]).areas(sidebar_area);

    TitleBar::new(
        app.location().href(),
        app.status_message.clone(),
        view.searching.then_some(spinner_frame),
    )
    .render(frame, title_area);

    tui.search_box.searching = view.searching;
    tui.search_box.render(frame, search_area);

    ContactList::new(&mut tui.contact_list, &view.entries).render(frame, list_area);

    DetailPane::new(&view.detail, view.detail_loading, app.error.as_deref())
        .render(frame, detail_area);

    frame.render_widget(
        Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::location::Location;
    use crate::test_support::{sample_page, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &mut TuiState) -> String {
        let view = app.view();
        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
        terminal.draw(|f| draw_ui(f, app, &view, tui, 0)).unwrap();
        terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_draws_every_region() {
        let mut app = test_app();
        app.data = sample_page();
        let mut tui = TuiState::new();
        let text = render(&app, &mut tui);
        assert!(text.contains("Contacts (/)"));
        assert!(text.contains("Search contacts"));
        assert!(text.contains("Ann Lee ★"));
        assert!(text.contains("This is a demo contacts app."));
        assert!(text.contains("Ctrl+N new"));
    }

    #[test]
    fn test_spinner_only_while_searching() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        update(&mut app, Action::Navigate(Location::new("/contacts/1")));
        assert!(!render(&app, &mut tui).contains("Searching"));

        update(&mut app, Action::SearchChanged("an".into()));
        assert!(render(&app, &mut tui).contains("Searching"));
    }
}
