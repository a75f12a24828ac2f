//! # TUI Components
//!
//! The page shell, one component per region.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: location, status message, search spinner
//! - `DetailPane`: the `#detail` region, dimmed while loading
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchBox`: the search field; emits the whole value on every edit
//! - `ContactList`: the sidebar list; keyboard selection, emits links to follow
//!
//! Components receive external data as props, never by reaching into the
//! core `App`. The run loop and `ui.rs` hand each one what it needs from
//! the current `RootView`.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── search_box.rs    (Search field)
//! ├── contact_list.rs  (Sidebar nav)
//! └── detail_pane.rs   (Detail region)
//! ```

pub mod contact_list;
pub mod detail_pane;
pub mod search_box;
mod title_bar;

pub use contact_list::{ContactList, ContactListState, ListEvent};
pub use detail_pane::DetailPane;
pub use search_box::{SearchBox, SearchEvent};
pub use title_bar::TitleBar;
