//! Mutable application state shared across the event and render layers.
//!
//! The state is deliberately plain data: event handlers mutate it, the
//! renderer reads it, and nothing here talks to the network or the
//! filesystem beyond holding the loaded [`ManifestStore`].

/// Top-level state container for one interactive session.
pub mod app_state;
/// Menu stack, entry lists and highlight movement.
pub mod menu;
/// Overlay modals: confirmation prompts and notices.
pub mod modal;
/// Screen variants and their view payloads.
pub mod types;

pub use app_state::AppState;
pub use menu::{MenuAction, MenuEntry, MenuId, MenuState};
pub use modal::{Modal, PendingAction};
pub use types::{
    Screen, SectionTable, SelectionView, TableRow, TablesView, WorkingView, SPINNER_FRAMES,
};
