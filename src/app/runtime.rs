use std::collections::HashMap;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

use crossterm::event::Event as CEvent;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{select, sync::mpsc, time::Duration};

use crate::cache::VersionCache;
use crate::compare::{UNAVAILABLE, classify};
use crate::manifest::{ManifestStore, Section};
use crate::net::RegistryClient;
use crate::resolve::{ResolveDone, ResolveJob, ResolvePurpose, resolve_many};
use crate::settings::Settings;
use crate::state::{AppState, Modal, Screen, SectionTable, TableRow, TablesView};
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

/// What: Run the interactive session end-to-end: load the manifest, set up
/// the terminal, spawn background workers, drive the event loop, and restore
/// the terminal on the way out.
///
/// Inputs:
/// - `settings`: resolved configuration (manifest path, registry, timing).
///
/// Output:
/// - `Ok(())` when the user exits; `Err` when startup fails (manifest
///   missing or unreadable, registry client construction) or the terminal
///   cannot be driven.
///
/// Details:
/// - The manifest and HTTP client are built before the terminal is touched,
///   so a startup failure leaves the shell untouched and exits nonzero.
/// - `DEPATROL_TEST_HEADLESS=1` skips terminal handling so the loop can run
///   under a test harness.
/// - The terminal is restored before an error from the loop propagates.
pub async fn run(settings: Settings) -> Result<()> {
    let store = ManifestStore::load(&settings.manifest_path, &settings.backup_dir_name)?;
    let registry = RegistryClient::new(&settings.registry_url, settings.request_timeout)?;
    let cache = VersionCache::new(
        settings.cache_ttl,
        settings.retry_attempts,
        settings.retry_base_delay,
    );
    tracing::info!(
        manifest = %store.path().display(),
        registry = %settings.registry_url,
        "[Runtime] starting session"
    );

    let headless = std::env::var("DEPATROL_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let result = run_loop(store, registry, cache, headless).await;
    if !headless {
        restore_terminal()?;
    }
    result
}

/// Event loop: draw one frame, then wait for a key, a finished batch, or a
/// timer tick.
async fn run_loop(
    store: ManifestStore,
    registry: RegistryClient,
    cache: VersionCache,
    headless: bool,
) -> Result<()> {
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::new(store);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    let (job_tx, mut job_rx) = mpsc::unbounded_channel::<ResolveJob>();
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<ResolveDone>();

    if !headless {
        std::thread::spawn(move || {
            loop {
                match crossterm::event::read() {
                    Ok(ev) => {
                        let _ = event_tx.send(ev);
                    }
                    Err(_) => {
                        // ignore transient read errors and continue
                    }
                }
            }
        });
    }

    // Resolver worker: one batch at a time, results reported by purpose.
    tokio::spawn(async move {
        while let Some(job) = job_rx.recv().await {
            let resolved = resolve_many(&cache, &registry, &job.requests).await;
            if done_tx
                .send(ResolveDone {
                    purpose: job.purpose,
                    resolved,
                })
                .is_err()
            {
                break;
            }
        }
    });

    let mut ticker = tokio::time::interval(Duration::from_millis(100));

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &app));
        }

        select! {
            Some(ev) = event_rx.recv() => {
                if crate::events::handle_event(&ev, &mut app, &job_tx) {
                    tracing::info!("[Runtime] exit requested");
                    break;
                }
            }
            Some(done) = done_rx.recv() => { apply_resolve_done(&mut app, &done); }
            _ = ticker.tick() => {
                if let Screen::Working(view) = &mut app.screen {
                    view.tick();
                }
            }
            else => { break; }
        }
    }
    Ok(())
}

/// What: Fold a completed resolve batch back into the interface.
///
/// Inputs:
/// - `app`: session state, currently on the busy screen
/// - `done`: the batch outcome, keyed by package name
///
/// Output:
/// - Check batches land on the tables screen; update batches rewrite the
///   manifest, pop one menu level and report a notice.
pub fn apply_resolve_done(app: &mut AppState, done: &ResolveDone) {
    match done.purpose {
        ResolvePurpose::Check => {
            let tables = build_tables(&app.store, &done.resolved);
            app.screen = Screen::Tables(TablesView::new(tables));
        }
        ResolvePurpose::WholeSection(section) | ResolvePurpose::Selected(section) => {
            apply_update(app, Some(section), &done.resolved);
        }
        ResolvePurpose::All => apply_update(app, None, &done.resolved),
    }
}

/// One table per populated section; a name missing from the batch is
/// rendered with the unavailable sentinel.
fn build_tables(store: &ManifestStore, resolved: &HashMap<String, String>) -> Vec<SectionTable> {
    Section::ALL
        .iter()
        .filter_map(|&section| {
            let pairs = store.section(section);
            if pairs.is_empty() {
                return None;
            }
            let rows = pairs
                .into_iter()
                .map(|(name, current)| {
                    let latest = resolved
                        .get(&name)
                        .cloned()
                        .unwrap_or_else(|| UNAVAILABLE.to_owned());
                    let status = classify(&current, &latest);
                    TableRow {
                        name,
                        current,
                        latest,
                        status,
                    }
                })
                .collect();
            Some(SectionTable { section, rows })
        })
        .collect()
}

/// Write resolved versions into one section, or into every existing
/// section when `target` is `None`.
///
/// Details:
/// - Each section takes only the names it already holds, so a batch built
///   from the merged view cannot seed one section with another's packages.
fn apply_update(app: &mut AppState, target: Option<Section>, resolved: &HashMap<String, String>) {
    let sections: Vec<Section> = match target {
        Some(section) => vec![section],
        None => Section::ALL
            .iter()
            .copied()
            .filter(|&s| app.store.has_section(s))
            .collect(),
    };

    let mut written = 0usize;
    for section in sections {
        let updates: Vec<(String, String)> = app
            .store
            .section(section)
            .into_iter()
            .filter_map(|(name, _)| resolved.get(&name).map(|latest| (name, latest.clone())))
            .collect();
        if updates.is_empty() {
            continue;
        }
        written += updates.len();
        if let Err(err) = app.store.update_section(section, &updates) {
            tracing::error!(
                error = %err,
                section = section.key(),
                "[Runtime] manifest write failed"
            );
            app.screen = Screen::Menu;
            app.modal = Modal::Notice {
                message: format!("Failed to write the manifest: {err}"),
            };
            return;
        }
    }

    app.screen = Screen::Menu;
    app.menu.back();
    let plural = if written == 1 { "" } else { "s" };
    app.modal = Modal::Notice {
        message: format!("Updated {written} package{plural}."),
    };
}
