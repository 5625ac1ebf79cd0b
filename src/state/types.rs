//! Screen variants and the data each one renders from.

use std::collections::HashSet;

use crate::compare::VersionStatus;
use crate::manifest::Section;

/// Spinner animation frames, advanced one per timer tick.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// One package line in a version table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Package name.
    pub name: String,
    /// Version string from the manifest.
    pub current: String,
    /// Resolved latest version, or the unavailable sentinel.
    pub latest: String,
    /// Comparison outcome for this row.
    pub status: VersionStatus,
}

/// One rendered section: a heading plus its rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTable {
    /// Section the rows came from.
    pub section: Section,
    /// Rows in manifest order.
    pub rows: Vec<TableRow>,
}

/// Payload of the results screen after "Check dependencies".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TablesView {
    /// Tables for every section present in the manifest.
    pub tables: Vec<SectionTable>,
    /// Vertical scroll offset in lines.
    pub scroll: u16,
}

impl TablesView {
    /// Results view with the scroll at the top.
    #[must_use]
    pub const fn new(tables: Vec<SectionTable>) -> Self {
        Self { tables, scroll: 0 }
    }

    /// Scroll one line up, stopping at the top.
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Scroll one line down; clamped against `max` computed by the
    /// renderer from the last layout.
    pub fn scroll_down(&mut self, max: u16) {
        if self.scroll < max {
            self.scroll += 1;
        }
    }
}

/// Payload of the package picker for one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionView {
    /// Section being edited.
    pub section: Section,
    /// `(name, current version)` pairs in manifest order.
    pub packages: Vec<(String, String)>,
    /// Index of the highlighted package.
    pub cursor: usize,
    /// Names the user has ticked so far.
    pub marked: HashSet<String>,
}

impl SelectionView {
    /// Picker over `packages` with nothing ticked yet.
    #[must_use]
    pub fn new(section: Section, packages: Vec<(String, String)>) -> Self {
        Self {
            section,
            packages,
            cursor: 0,
            marked: HashSet::new(),
        }
    }

    /// Move the highlight up one package, stopping at the top.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the highlight down one package, stopping at the bottom.
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.packages.len() {
            self.cursor += 1;
        }
    }

    /// Tick or untick the highlighted package.
    pub fn toggle_current(&mut self) {
        if let Some((name, _)) = self.packages.get(self.cursor) {
            if self.marked.contains(name) {
                self.marked.remove(name);
            } else {
                self.marked.insert(name.clone());
            }
        }
    }

    /// Ticked names in list order, not tick order.
    #[must_use]
    pub fn marked_in_order(&self) -> Vec<String> {
        self.packages
            .iter()
            .filter(|(name, _)| self.marked.contains(name))
            .map(|(name, _)| name.clone())
            .collect()
    }
}

/// Payload of the busy screen shown while resolutions run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingView {
    /// Caption above the spinner, e.g. "Checking dependencies".
    pub title: String,
    /// Index into [`SPINNER_FRAMES`].
    pub frame: usize,
    /// Simulated progress, capped at 90 until completion.
    pub percent: u8,
    ticks: u32,
}

impl WorkingView {
    /// Busy view starting at frame zero and zero percent.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            frame: 0,
            percent: 0,
            ticks: 0,
        }
    }

    /// Advance one 100 ms tick: next spinner frame always, plus five
    /// percent every third tick until the 90 percent holding point.
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
        self.ticks += 1;
        if self.ticks % 3 == 0 && self.percent < 90 {
            self.percent += 5;
        }
    }
}

/// Which screen the session is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Screen {
    /// One of the menus; which one lives in [`crate::state::MenuState`].
    #[default]
    Menu,
    /// Version tables after a check.
    Tables(TablesView),
    /// Package picker for one section.
    Selection(SelectionView),
    /// Spinner and progress bar while resolutions are in flight.
    Working(WorkingView),
}
