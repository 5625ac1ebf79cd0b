//! Key handling for the version tables shown after a check.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, Screen};

/// Handle one key press while the results tables are on screen.
pub fn handle_tables_key(ke: KeyEvent, app: &mut AppState) -> bool {
    let Screen::Tables(view) = &mut app.screen else {
        return false;
    };
    match ke.code {
        KeyCode::Up => view.scroll_up(),
        KeyCode::Down => {
            let lines = crate::ui::table::rendered_line_count(&view.tables);
            let max = u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX);
            view.scroll_down(max);
        }
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.screen = Screen::Menu,
        _ => {}
    }
    false
}
