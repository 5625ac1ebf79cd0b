//! Top-level state container for one interactive session.

use crate::manifest::ManifestStore;
use crate::state::menu::MenuState;
use crate::state::modal::Modal;
use crate::state::types::Screen;

/// Everything the renderer needs and the event handlers mutate.
#[derive(Debug)]
pub struct AppState {
    /// Loaded manifest, reread and rewritten through its store.
    pub store: ManifestStore,
    /// Menu stack and highlight.
    pub menu: MenuState,
    /// Active screen.
    pub screen: Screen,
    /// Overlay, if any.
    pub modal: Modal,
}

impl AppState {
    /// Session state positioned on the root menu.
    #[must_use]
    pub fn new(store: ManifestStore) -> Self {
        Self {
            store,
            menu: MenuState::new(),
            screen: Screen::Menu,
            modal: Modal::None,
        }
    }
}
