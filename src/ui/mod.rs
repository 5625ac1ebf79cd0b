//! Rendering layer for the TUI.
//!
//! One function per screen, all stateless over [`AppState`]: the event
//! layer mutates, this layer only draws. Modals are painted last so
//! they sit above whatever screen is active.

use ratatui::Frame;
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::state::{AppState, Screen};
use crate::theme::theme;

mod menu;
mod modal;
mod selection;
/// Box-drawing line builders for the version tables.
pub mod table;
mod tables;
mod working;

/// Draw one frame of the interface.
pub fn ui(f: &mut Frame, app: &AppState) {
    let th = theme();
    let area = f.area();

    // Background
    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    match &app.screen {
        Screen::Menu => menu::render(f, app, area),
        Screen::Tables(view) => tables::render(f, view, area),
        Screen::Selection(view) => selection::render(f, view, area),
        Screen::Working(view) => working::render(f, view, area),
    }

    modal::render(f, &app.modal, area);
}
