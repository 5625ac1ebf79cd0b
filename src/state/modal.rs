//! Overlay modals drawn above whatever screen is active.

use crate::manifest::Section;

/// Destructive action a confirmation modal is guarding.
///
/// Details:
/// - Carried inside [`Modal::Confirm`] so the `y` handler knows what
///   the user just agreed to without re-deriving it from menu state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Rewrite every section that exists in the manifest.
    UpdateAll,
    /// Rewrite one whole section.
    UpdateWholeSection(Section),
    /// Rewrite only the named packages inside one section.
    UpdateSelected {
        /// Section the names belong to.
        section: Section,
        /// Packages the user ticked, in list order.
        names: Vec<String>,
    },
}

/// Modal overlay state.
///
/// Details:
/// - `Confirm` accepts only `y` and `n`; every other key is ignored.
/// - `Notice` is dismissed by any key and is used for completion and
///   empty-section messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No overlay; keys go to the active screen.
    #[default]
    None,
    /// Yes/no question guarding a manifest rewrite.
    Confirm {
        /// Question shown to the user.
        message: String,
        /// What to run when the user answers `y`.
        action: PendingAction,
    },
    /// Informational message dismissed by any key.
    Notice {
        /// Text shown to the user.
        message: String,
    },
}

impl Modal {
    /// Whether an overlay is currently shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_modal_is_closed() {
        assert!(!Modal::default().is_open());
    }

    #[test]
    fn confirm_and_notice_report_open() {
        let confirm = Modal::Confirm {
            message: "Update all packages in devDependencies?".into(),
            action: PendingAction::UpdateWholeSection(Section::DevDependencies),
        };
        let notice = Modal::Notice {
            message: "Backup created".into(),
        };
        assert!(confirm.is_open());
        assert!(notice.is_open());
    }

    #[test]
    fn selected_action_keeps_names_in_order() {
        let action = PendingAction::UpdateSelected {
            section: Section::Dependencies,
            names: vec!["react".into(), "left-pad".into()],
        };
        if let PendingAction::UpdateSelected { names, .. } = action {
            assert_eq!(names, ["react", "left-pad"]);
        } else {
            unreachable!();
        }
    }
}
