//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User types in the search box? That's `Action::SearchChanged(text)`.
//! A loader answers? That's `Action::LoadCompleted { id, result }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the adapter what I/O to start.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Ordering: each navigation gets a fresh id and supersedes the previous
//! one. Completions carrying any other id are dropped, so a slow answer to
//! an old search can never overwrite a newer one.

use std::time::Duration;

use log::{debug, info, warn};

use crate::core::history::HistoryMode;
use crate::core::location::Location;
use crate::core::navigation::Navigation;
use crate::core::page::{PageData, Redirect};
use crate::core::search::SearchSession;
use crate::core::state::{App, NavigationId, PendingNavigation};

#[derive(Debug, Clone)]
pub enum Action {
    /// The search box changed (one keystroke).
    SearchChanged(String),
    /// A debounce ticket ran out.
    SearchDebounceElapsed(u64),
    /// Follow a link.
    Navigate(Location),
    /// Re-run the loaders for the current location.
    Reload,
    Back,
    Forward,
    /// The "New" button.
    CreateContact,
    /// The create action answered.
    ActionCompleted {
        id: NavigationId,
        result: Result<Redirect, String>,
    },
    /// A loader answered.
    LoadCompleted {
        id: NavigationId,
        result: Result<PageData, String>,
    },
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Run the loaders for `location` and answer with `LoadCompleted { id }`.
    Load { id: NavigationId, location: Location },
    /// Run the create action and answer with `ActionCompleted { id }`.
    Create { id: NavigationId },
    /// Answer with `SearchDebounceElapsed(ticket)` after `delay`.
    ScheduleDebounce { ticket: u64, delay: Duration },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SearchChanged(value) => {
            app.search_input = value;
            if app.debounce.is_zero() {
                submit_search(app)
            } else {
                app.debounce_ticket += 1;
                Effect::ScheduleDebounce {
                    ticket: app.debounce_ticket,
                    delay: app.debounce,
                }
            }
        }
        Action::SearchDebounceElapsed(ticket) => {
            if ticket == app.debounce_ticket {
                submit_search(app)
            } else {
                debug!("Dropping stale debounce ticket {}", ticket);
                Effect::None
            }
        }
        Action::Navigate(location) => {
            cancel_debounce(app);
            begin_load(app, location, HistoryMode::Push, false)
        }
        Action::Reload => {
            let location = app.location().clone();
            begin_load(app, location, HistoryMode::Replace, false)
        }
        Action::Back => match app.history.back_target() {
            Some((idx, location)) => {
                let location = location.clone();
                cancel_debounce(app);
                begin_load(app, location, HistoryMode::Traverse(idx), false)
            }
            None => Effect::None,
        },
        Action::Forward => match app.history.forward_target() {
            Some((idx, location)) => {
                let location = location.clone();
                cancel_debounce(app);
                begin_load(app, location, HistoryMode::Traverse(idx), false)
            }
            None => Effect::None,
        },
        Action::CreateContact => {
            cancel_debounce(app);
            reset_search_session(app);
            let id = app.next_navigation_id();
            app.navigation = Navigation::Submitting {
                location: Location::root(),
            };
            app.pending = Some(PendingNavigation {
                id,
                mode: HistoryMode::Push,
                from_search: false,
            });
            app.status_message = String::from("Creating contact...");
            Effect::Create { id }
        }
        Action::ActionCompleted { id, result } => {
            if !app.is_pending(id) {
                debug!("Dropping superseded action result (id={})", id);
                return Effect::None;
            }
            match result {
                Ok(redirect) => {
                    info!("Action redirected to {}", redirect.location);
                    app.navigation = Navigation::Loading {
                        location: redirect.location.clone(),
                    };
                    Effect::Load {
                        id,
                        location: redirect.location,
                    }
                }
                Err(e) => {
                    fail(app, e);
                    Effect::None
                }
            }
        }
        Action::LoadCompleted { id, result } => {
            if !app.is_pending(id) {
                debug!("Dropping superseded load result (id={})", id);
                return Effect::None;
            }
            match result {
                Ok(data) => commit(app, data),
                Err(e) => fail(app, e),
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn submit_search(app: &mut App) -> Effect {
    let location = Location::search(&app.search_input);
    let mut mode = app.search.submit();
    // A pushed search entry that never committed is still owed to history;
    // the newer query takes its place instead of overwriting the entry before it.
    if mode == HistoryMode::Replace
        && app
            .pending
            .is_some_and(|p| p.from_search && p.mode == HistoryMode::Push)
    {
        mode = HistoryMode::Push;
    }
    begin_load(app, location, mode, true)
}

fn begin_load(app: &mut App, location: Location, mode: HistoryMode, from_search: bool) -> Effect {
    let id = app.next_navigation_id();
    if let Some(prev) = app.pending {
        debug!("Navigation {} superseded by {}", prev.id, id);
    }
    if !from_search {
        reset_search_session(app);
    }
    app.navigation = Navigation::Loading {
        location: location.clone(),
    };
    app.pending = Some(PendingNavigation {
        id,
        mode,
        from_search,
    });
    Effect::Load { id, location }
}

fn cancel_debounce(app: &mut App) {
    app.debounce_ticket += 1;
}

/// A superseded search never committed, so the session follows what did.
fn reset_search_session(app: &mut App) {
    app.search = SearchSession::from_query(app.location().query());
}

fn commit(app: &mut App, data: PageData) {
    let Some(pending) = app.pending.take() else {
        return;
    };
    let location = match std::mem::take(&mut app.navigation) {
        Navigation::Loading { location } | Navigation::Submitting { location } => location,
        Navigation::Idle => {
            warn!("Load {} completed with no navigation in flight", pending.id);
            return;
        }
    };

    app.history.commit(pending.mode, location);
    let query = app.location().query().map(str::to_string);
    app.search = SearchSession::from_query(query.as_deref());
    // Keystrokes may have landed after this search was sent; keep them.
    if !pending.from_search {
        app.search_input = query.unwrap_or_default();
    }
    app.status_message = format!("{} contacts", data.root.contacts.len());
    app.data = data;
    app.error = None;
    info!("Committed navigation {} to {}", pending.id, app.location());
}

fn fail(app: &mut App, error: String) {
    warn!("Navigation failed: {}", error);
    app.pending = None;
    app.navigation = Navigation::Idle;
    reset_search_session(app);
    app.status_message = format!("Error: {}", error);
    app.error = Some(error);
}
