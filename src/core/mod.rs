//! # Core Application Logic
//!
//! This module contains the contacts app's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • RootView (derived)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │    Web     │
//!          │  Adapter   │                │  Adapter   │
//!          │ (ratatui)  │                │   (axum)   │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`contact`]: The `Contact` record and its display rules
//! - [`location`]: `Location` (path + query) and the route table
//! - [`navigation`]: The in-flight navigation and link highlight states
//! - [`history`]: Committed locations with push/replace/traverse
//! - [`search`]: The push-vs-replace policy for search submissions
//! - [`page`]: Loader data and action redirects
//! - [`state`]: The `App` struct: all client state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`view`]: `RootView`, the page shell as plain data
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod contact;
pub mod history;
pub mod location;
pub mod navigation;
pub mod page;
pub mod search;
pub mod state;
pub mod view;
