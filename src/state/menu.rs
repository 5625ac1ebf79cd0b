//! Menu identifiers, entry tables and the navigation stack.

use crate::manifest::Section;

/// Identifies one of the fixed menus the session can display.
///
/// Details:
/// - `Home` is the root menu shown at startup.
/// - `Update` lists the per-section update entries plus "everything".
/// - `Section` offers whole-section versus hand-picked updates for the
///   section stored in [`MenuState::active_section`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuId {
    /// Root menu.
    #[default]
    Home,
    /// "Update dependencies" submenu.
    Update,
    /// Per-section submenu (whole section or pick packages).
    Section,
}

/// What activating a menu entry should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Resolve latest versions for every package and show the tables.
    CheckAll,
    /// Descend into the update submenu.
    OpenUpdateMenu,
    /// Descend into the per-section submenu for the named section.
    OpenSectionMenu(Section),
    /// Ask for confirmation, then update every section at once.
    ConfirmUpdateAll,
    /// Ask for confirmation, then update the active section wholesale.
    ConfirmWholeSection,
    /// Open the package picker for the active section.
    OpenSelection,
    /// Write a timestamped manifest backup.
    Backup,
    /// Pop one level off the menu stack.
    Back,
    /// Leave the application.
    Exit,
}

/// A single selectable line in a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    /// Text shown to the user.
    pub label: &'static str,
    /// Effect of pressing Enter on this line.
    pub action: MenuAction,
}

const fn entry(label: &'static str, action: MenuAction) -> MenuEntry {
    MenuEntry { label, action }
}

const HOME_ENTRIES: [MenuEntry; 4] = [
    entry("Check dependencies", MenuAction::CheckAll),
    entry("Update dependencies", MenuAction::OpenUpdateMenu),
    entry("Create backup", MenuAction::Backup),
    entry("Exit", MenuAction::Exit),
];

const UPDATE_ENTRIES: [MenuEntry; 5] = [
    entry(
        "Update dependencies",
        MenuAction::OpenSectionMenu(Section::Dependencies),
    ),
    entry(
        "Update dev dependencies",
        MenuAction::OpenSectionMenu(Section::DevDependencies),
    ),
    entry(
        "Update overrides",
        MenuAction::OpenSectionMenu(Section::Overrides),
    ),
    entry("Update everything", MenuAction::ConfirmUpdateAll),
    entry("Go back", MenuAction::Back),
];

const SECTION_ENTRIES: [MenuEntry; 3] = [
    entry("Update the whole section", MenuAction::ConfirmWholeSection),
    entry("Pick packages to update", MenuAction::OpenSelection),
    entry("Go back", MenuAction::Back),
];

/// Navigation state: which menu is current, the path back to the root
/// and the highlighted index.
///
/// Details:
/// - Entering a submenu pushes the current menu and resets the
///   highlight to the first entry.
/// - Going back pops one level and also resets the highlight; on the
///   root menu it does nothing.
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    stack: Vec<MenuId>,
    current: MenuId,
    /// Index of the highlighted entry in [`Self::entries`].
    pub selected: usize,
    /// Section the `Section` menu (and the picker) operate on.
    pub active_section: Option<Section>,
}

impl MenuState {
    /// Fresh state positioned on the root menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Menu currently displayed.
    #[must_use]
    pub const fn current(&self) -> MenuId {
        self.current
    }

    /// How many levels deep the user has descended.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Entries of the current menu, in display order.
    #[must_use]
    pub fn entries(&self) -> &'static [MenuEntry] {
        match self.current {
            MenuId::Home => &HOME_ENTRIES,
            MenuId::Update => &UPDATE_ENTRIES,
            MenuId::Section => &SECTION_ENTRIES,
        }
    }

    /// Entry under the highlight.
    #[must_use]
    pub fn selected_entry(&self) -> MenuEntry {
        let entries = self.entries();
        entries[self.selected.min(entries.len() - 1)]
    }

    /// Push the current menu and switch to `menu`, highlight on top.
    pub fn enter(&mut self, menu: MenuId) {
        self.stack.push(self.current);
        self.current = menu;
        self.selected = 0;
    }

    /// Pop one level; a no-op when already on the root menu.
    pub fn back(&mut self) {
        if let Some(previous) = self.stack.pop() {
            self.current = previous;
            self.selected = 0;
        }
    }

    /// Move the highlight up one entry, stopping at the top.
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the highlight down one entry, stopping at the bottom.
    pub fn move_down(&mut self) {
        let last = self.entries().len() - 1;
        if self.selected < last {
            self.selected += 1;
        }
    }
}
