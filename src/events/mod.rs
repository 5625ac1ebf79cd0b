//! Event handling layer for the TUI.
//!
//! This module owns the top-level dispatch: one terminal event comes in,
//! the [`AppState`] is mutated, and resolve jobs fan out to the worker
//! through a channel. Screen-specific logic lives in submodules to keep
//! files small.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::resolve::ResolveJob;
use crate::state::{AppState, Modal, Screen};

mod jobs;
mod menu;
mod selection;
mod tables;

pub use jobs::launch_pending;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
///
/// Details:
/// - Only key presses are handled; repeats and releases are dropped.
/// - `Ctrl+C` exits from every screen and every modal.
/// - An open modal swallows all other keys: confirmations react to
///   `y`/`n` only, notices close on any key.
pub fn handle_event(
    ev: &CEvent,
    app: &mut AppState,
    jobs_tx: &mpsc::UnboundedSender<ResolveJob>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    // Modal handling
    match &app.modal {
        Modal::Confirm { .. } => {
            match ke.code {
                KeyCode::Char('y') => {
                    if let Modal::Confirm { action, .. } = std::mem::take(&mut app.modal) {
                        jobs::launch_pending(app, jobs_tx, action);
                    }
                }
                KeyCode::Char('n') => app.modal = Modal::None,
                _ => {}
            }
            return false;
        }
        Modal::Notice { .. } => {
            app.modal = Modal::None;
            return false;
        }
        Modal::None => {}
    }

    match &app.screen {
        Screen::Menu => menu::handle_menu_key(*ke, app, jobs_tx),
        Screen::Tables(_) => tables::handle_tables_key(*ke, app),
        Screen::Selection(_) => selection::handle_selection_key(*ke, app),
        // Resolutions are in flight; nothing to steer until they land.
        Screen::Working(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PendingAction;
    use crate::test_utils::sample_state;
    use crossterm::event::KeyEvent;

    fn press(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    /// What: Ctrl+C requests exit regardless of screen or modal state.
    ///
    /// - Input: Ctrl+C on the menu, then again with a notice open
    /// - Output: `handle_event` returns `true` both times
    fn ctrl_c_always_requests_exit() {
        let (_dir, mut app) = sample_state();
        let (tx, _rx) = mpsc::unbounded_channel();
        let ctrl_c = CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(handle_event(&ctrl_c, &mut app, &tx));

        app.modal = Modal::Notice {
            message: "Backup created".into(),
        };
        assert!(handle_event(&ctrl_c, &mut app, &tx));
    }

    #[test]
    /// What: A confirmation modal reacts to `y` and `n` only.
    ///
    /// - Input: `x`, Esc and Enter while a confirm modal is open, then `n`
    /// - Output: Modal stays open through the ignored keys and closes on `n`
    fn confirm_ignores_everything_but_y_and_n() {
        let (_dir, mut app) = sample_state();
        let (tx, mut rx) = mpsc::unbounded_channel();
        app.modal = Modal::Confirm {
            message: "Update every package in all sections?".into(),
            action: PendingAction::UpdateAll,
        };

        for code in [KeyCode::Char('x'), KeyCode::Esc, KeyCode::Enter] {
            assert!(!handle_event(&press(code), &mut app, &tx));
            assert!(app.modal.is_open());
        }

        assert!(!handle_event(&press(KeyCode::Char('n')), &mut app, &tx));
        assert!(!app.modal.is_open());
        assert!(matches!(app.screen, Screen::Menu));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// What: Answering `y` launches the pending update and shows the busy screen.
    ///
    /// - Input: Confirm modal for a whole-section update, press `y`
    /// - Output: One job on the channel, screen switches to `Working`
    fn confirm_yes_submits_the_pending_job() {
        let (_dir, mut app) = sample_state();
        let (tx, mut rx) = mpsc::unbounded_channel();
        app.modal = Modal::Confirm {
            message: "Update all packages in dependencies?".into(),
            action: PendingAction::UpdateWholeSection(crate::manifest::Section::Dependencies),
        };

        assert!(!handle_event(&press(KeyCode::Char('y')), &mut app, &tx));
        assert!(!app.modal.is_open());
        assert!(matches!(app.screen, Screen::Working(_)));
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    /// What: A notice modal closes on any key press.
    ///
    /// - Input: Notice open, press `a`
    /// - Output: Modal closed, no exit requested
    fn notice_closes_on_any_key() {
        let (_dir, mut app) = sample_state();
        let (tx, _rx) = mpsc::unbounded_channel();
        app.modal = Modal::Notice {
            message: "The overrides section is empty.".into(),
        };
        assert!(!handle_event(&press(KeyCode::Char('a')), &mut app, &tx));
        assert!(!app.modal.is_open());
    }

    #[test]
    /// What: Key releases and repeats are ignored.
    ///
    /// - Input: Enter with `KeyEventKind::Release`
    /// - Output: Nothing changes, nothing is sent
    fn non_press_events_are_dropped() {
        let (_dir, mut app) = sample_state();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ke = KeyEvent::new(KeyCode::Enter, KeyModifiers::empty());
        ke.kind = KeyEventKind::Release;
        assert!(!handle_event(&CEvent::Key(ke), &mut app, &tx));
        assert!(matches!(app.screen, Screen::Menu));
        assert!(rx.try_recv().is_err());
    }
}
