//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page
//! shell, and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Effects
//!
//! `update()` never does I/O. The run loop carries out each `Effect` it
//! returns by spawning a tokio task that reports back over a channel:
//!
//! ```text
//! Effect::Load      → routes::load_page     → Action::LoadCompleted
//! Effect::Create    → routes::create_action → Action::ActionCompleted
//! Effect::ScheduleDebounce → sleep          → Action::SearchDebounceElapsed
//! ```
//!
//! Starting a load or create aborts the one before it. The abort is best
//! effort; the reducer drops any completion whose id is no longer pending.
//!
//! ## Redraw Strategy
//!
//! Draws every ~80ms while a navigation is in flight (spinner), otherwise
//! sleeps up to 500ms and only redraws on events or task results.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::location::Location;
use crate::core::state::{App, NavigationId};
use crate::routes;
use crate::store::ContactStore;
use crate::tui::component::EventHandler;
use crate::tui::components::{ContactListState, ListEvent, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_box: SearchBox,
    pub contact_list: ContactListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_box: SearchBox::new(),
            contact_list: ContactListState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste, Show, SetCursorStyle::SteadyBar)?;
        info!("Terminal modes enabled (bracketed paste, steady bar cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

/// Carries out effects and owns the handle of the in-flight navigation task.
struct EffectRunner {
    store: Arc<dyn ContactStore>,
    tx: mpsc::Sender<Action>,
    in_flight: Option<AbortHandle>,
}

impl EffectRunner {
    /// Returns `true` when the app should quit.
    fn run(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::None => {}
            Effect::Quit => return true,
            Effect::Load { id, location } => {
                let handle = spawn_load(self.store.clone(), id, location, self.tx.clone());
                self.replace_in_flight(handle);
            }
            Effect::Create { id } => {
                let handle = spawn_create(self.store.clone(), id, self.tx.clone());
                self.replace_in_flight(handle);
            }
            Effect::ScheduleDebounce { ticket, delay } => {
                spawn_debounce(ticket, delay, self.tx.clone());
            }
        }
        false
    }

    fn replace_in_flight(&mut self, handle: AbortHandle) {
        if let Some(previous) = self.in_flight.replace(handle) {
            previous.abort();
        }
    }
}

pub fn run(store: Arc<dyn ContactStore>, debounce: Duration) -> std::io::Result<()> {
    let mut app = App::new(debounce);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut effects = EffectRunner {
        store,
        tx,
        in_flight: None,
    };

    // Initial load of "/"
    let effect = update(&mut app, Action::Reload);
    effects.run(effect);

    let start_time = Instant::now();
    let mut needs_redraw = true;

    'main: loop {
        let animating = !app.navigation.is_idle();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            tui.search_box.sync(&app.search_input);
            let view = app.view();
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &view, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match event {
                TuiEvent::Resize => continue,
                TuiEvent::ForceQuit => Action::Quit,
                TuiEvent::NewContact => Action::CreateContact,
                TuiEvent::Reload => Action::Reload,
                TuiEvent::Back => Action::Back,
                TuiEvent::Forward => Action::Forward,
                TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::Submit => {
                    let entries = app.view().entries;
                    match tui.contact_list.handle_event(&event, &entries) {
                        Some(ListEvent::Open(href)) => match Location::parse(&href) {
                            Ok(location) => Action::Navigate(location),
                            Err(e) => {
                                warn!("Bad link {}: {}", href, e);
                                continue;
                            }
                        },
                        None => continue,
                    }
                }
                _ => match tui.search_box.handle_event(&event) {
                    Some(SearchEvent::Changed(value)) => Action::SearchChanged(value),
                    None => continue,
                },
            };
            let effect = update(&mut app, action);
            if effects.run(effect) {
                break 'main;
            }
        }

        // Handle background task results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if effects.run(effect) {
                break 'main;
            }
        }
    }

    if let Some(handle) = effects.in_flight.take() {
        handle.abort();
    }
    ratatui::restore();
    Ok(())
}

fn send(tx: &mpsc::Sender<Action>, action: Action) {
    if tx.send(action).is_err() {
        warn!("Failed to send action: receiver dropped");
    }
}

fn spawn_load(
    store: Arc<dyn ContactStore>,
    id: NavigationId,
    location: Location,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!("Spawning load {} for {}", id, location);
    tokio::spawn(async move {
        let result = routes::load_page(store.as_ref(), &location)
            .await
            .map_err(|e| e.to_string());
        send(&tx, Action::LoadCompleted { id, result });
    })
    .abort_handle()
}

fn spawn_create(store: Arc<dyn ContactStore>, id: NavigationId, tx: mpsc::Sender<Action>) -> AbortHandle {
    info!("Spawning create action {}", id);
    tokio::spawn(async move {
        let result = routes::create_action(store.as_ref())
            .await
            .map_err(|e| e.to_string());
        send(&tx, Action::ActionCompleted { id, result });
    })
    .abort_handle()
}

fn spawn_debounce(ticket: u64, delay: Duration, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        send(&tx, Action::SearchDebounceElapsed(ticket));
    });
}
