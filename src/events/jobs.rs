//! Builders for the resolve jobs the event handlers submit.

use tokio::sync::mpsc;

use crate::compare::UNAVAILABLE;
use crate::manifest::{ManifestStore, Section};
use crate::resolve::{ResolveJob, ResolvePurpose, ResolveRequest};
use crate::state::{AppState, PendingAction, Screen, WorkingView};

/// Caption shown while a check runs.
pub const CHECK_TITLE: &str = "Fetching latest versions";
/// Caption shown while an update runs.
pub const UPDATE_TITLE: &str = "Updating packages";

fn requests_with_fallback(pairs: Vec<(String, String)>) -> Vec<ResolveRequest> {
    pairs
        .into_iter()
        .map(|(name, current)| ResolveRequest {
            name,
            fallback: current,
        })
        .collect()
}

/// Job behind "Check dependencies": every package from the merged view,
/// falling back to the unavailable sentinel so failures still render.
#[must_use]
pub fn check_job(store: &ManifestStore) -> ResolveJob {
    let requests = store
        .all_packages()
        .into_iter()
        .map(|(name, _)| ResolveRequest {
            name,
            fallback: UNAVAILABLE.to_owned(),
        })
        .collect();
    ResolveJob {
        purpose: ResolvePurpose::Check,
        requests,
    }
}

/// Job behind "Update everything": the merged view again, but a failed
/// lookup falls back to the current version so nothing regresses.
#[must_use]
pub fn all_job(store: &ManifestStore) -> ResolveJob {
    ResolveJob {
        purpose: ResolvePurpose::All,
        requests: requests_with_fallback(store.all_packages()),
    }
}

/// Job behind "Update the whole section".
#[must_use]
pub fn whole_section_job(store: &ManifestStore, section: Section) -> ResolveJob {
    ResolveJob {
        purpose: ResolvePurpose::WholeSection(section),
        requests: requests_with_fallback(store.section(section)),
    }
}

/// Job behind the package picker: only the ticked names.
#[must_use]
pub fn selected_job(store: &ManifestStore, section: Section, names: &[String]) -> ResolveJob {
    let requests = store
        .section(section)
        .into_iter()
        .filter(|(name, _)| names.iter().any(|n| n == name))
        .map(|(name, current)| ResolveRequest {
            name,
            fallback: current,
        })
        .collect();
    ResolveJob {
        purpose: ResolvePurpose::Selected(section),
        requests,
    }
}

/// Turn a confirmed [`PendingAction`] into a submitted job plus the
/// busy screen that covers it.
pub fn launch_pending(
    app: &mut AppState,
    jobs_tx: &mpsc::UnboundedSender<ResolveJob>,
    action: PendingAction,
) {
    let job = match action {
        PendingAction::UpdateAll => all_job(&app.store),
        PendingAction::UpdateWholeSection(section) => whole_section_job(&app.store, section),
        PendingAction::UpdateSelected { section, names } => {
            selected_job(&app.store, section, &names)
        }
    };
    tracing::info!(
        packages = job.requests.len(),
        purpose = ?job.purpose,
        "[Events] submitting resolve job"
    );
    app.screen = Screen::Working(WorkingView::new(UPDATE_TITLE));
    let _ = jobs_tx.send(job);
}
