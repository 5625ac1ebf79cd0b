//! Key handling for the package picker.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, Modal, PendingAction, Screen};

/// Handle one key press while the picker is on screen.
///
/// Details:
/// - Space toggles the highlighted package, Enter asks for
///   confirmation, Esc abandons the picker along with its ticks.
pub fn handle_selection_key(ke: KeyEvent, app: &mut AppState) -> bool {
    let Screen::Selection(view) = &mut app.screen else {
        return false;
    };
    match ke.code {
        KeyCode::Up => view.move_up(),
        KeyCode::Down => view.move_down(),
        KeyCode::Char(' ') => view.toggle_current(),
        KeyCode::Esc => app.screen = Screen::Menu,
        KeyCode::Enter => {
            let names = view.marked_in_order();
            if names.is_empty() {
                app.modal = Modal::Notice {
                    message: "No packages selected.".into(),
                };
            } else {
                let plural = if names.len() == 1 { "" } else { "s" };
                app.modal = Modal::Confirm {
                    message: format!(
                        "Update {} package{} in {}?",
                        names.len(),
                        plural,
                        view.section.key()
                    ),
                    action: PendingAction::UpdateSelected {
                        section: view.section,
                        names,
                    },
                };
            }
        }
        _ => {}
    }
    false
}
