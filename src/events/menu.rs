//! Key handling for the three menus.

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::resolve::ResolveJob;
use crate::state::{AppState, MenuAction, MenuId, Modal, Screen, SelectionView, WorkingView};

use super::jobs;

/// Handle one key press while a menu is on screen.
///
/// Returns `true` when the "Exit" entry was activated.
pub fn handle_menu_key(
    ke: KeyEvent,
    app: &mut AppState,
    jobs_tx: &mpsc::UnboundedSender<ResolveJob>,
) -> bool {
    match ke.code {
        KeyCode::Up => app.menu.move_up(),
        KeyCode::Down => app.menu.move_down(),
        KeyCode::Esc => app.menu.back(),
        KeyCode::Enter => return activate(app, jobs_tx),
        _ => {}
    }
    false
}

/// Run the highlighted entry's action.
fn activate(app: &mut AppState, jobs_tx: &mpsc::UnboundedSender<ResolveJob>) -> bool {
    match app.menu.selected_entry().action {
        MenuAction::CheckAll => {
            if app.store.all_packages().is_empty() {
                app.modal = Modal::Notice {
                    message: "No dependencies found in the manifest.".into(),
                };
            } else {
                app.screen = Screen::Working(WorkingView::new(jobs::CHECK_TITLE));
                let _ = jobs_tx.send(jobs::check_job(&app.store));
            }
        }
        MenuAction::OpenUpdateMenu => app.menu.enter(MenuId::Update),
        MenuAction::OpenSectionMenu(section) => {
            if app.store.section(section).is_empty() {
                app.modal = Modal::Notice {
                    message: format!("The {} section is empty.", section.key()),
                };
            } else {
                app.menu.active_section = Some(section);
                app.menu.enter(MenuId::Section);
            }
        }
        MenuAction::ConfirmUpdateAll => {
            if app.store.all_packages().is_empty() {
                app.modal = Modal::Notice {
                    message: "No dependencies found in the manifest.".into(),
                };
            } else {
                app.modal = Modal::Confirm {
                    message: "Update every package in all sections?".into(),
                    action: crate::state::PendingAction::UpdateAll,
                };
            }
        }
        MenuAction::ConfirmWholeSection => {
            if let Some(section) = app.menu.active_section {
                app.modal = Modal::Confirm {
                    message: format!("Update all packages in {}?", section.key()),
                    action: crate::state::PendingAction::UpdateWholeSection(section),
                };
            }
        }
        MenuAction::OpenSelection => {
            if let Some(section) = app.menu.active_section {
                app.screen = Screen::Selection(SelectionView::new(
                    section,
                    app.store.section(section),
                ));
            }
        }
        MenuAction::Backup => run_backup(app),
        MenuAction::Back => app.menu.back(),
        MenuAction::Exit => return true,
    }
    false
}

/// Write a timestamped backup and report the outcome in a notice.
///
/// Details:
/// - The menu stays where it is; a backup is not a mode of its own.
fn run_backup(app: &mut AppState) {
    match app.store.backup() {
        Ok(path) => {
            tracing::info!(path = %path.display(), "[Backup] manifest copied");
            app.modal = Modal::Notice {
                message: format!("Backup created at {}", path.display()),
            };
        }
        Err(err) => {
            tracing::error!(error = %err, "[Backup] copy failed");
            app.modal = Modal::Notice {
                message: format!("Backup failed: {err}"),
            };
        }
    }
}
