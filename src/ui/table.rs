//! Box-drawing builders for the version tables.
//!
//! Kept free of `Frame` so the event layer can reuse the line count
//! for scroll clamping and tests can assert on exact strings.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::compare::VersionStatus;
use crate::state::{SectionTable, TableRow};
use crate::theme::Theme;
use crate::util::{center_cell, pad_cell};

/// Package column width.
const NAME_W: usize = 35;
/// Current-version column width.
const CURRENT_W: usize = 12;
/// Latest-version column width.
const LATEST_W: usize = 12;
/// Status column width.
const STATUS_W: usize = 30;

fn rule(left: &str, mid: &str, right: &str) -> String {
    let seg = |w: usize| "─".repeat(w + 2);
    format!(
        "{left}{}{mid}{}{mid}{}{mid}{}{right}",
        seg(NAME_W),
        seg(CURRENT_W),
        seg(LATEST_W),
        seg(STATUS_W)
    )
}

// The status column is centered, the rest left-aligned.
fn cells(name: &str, current: &str, latest: &str, status: &str) -> String {
    format!(
        "│ {} │ {} │ {} │ {} │",
        pad_cell(name, NAME_W),
        pad_cell(current, CURRENT_W),
        pad_cell(latest, LATEST_W),
        center_cell(status, STATUS_W)
    )
}

/// Human label for one row's comparison outcome.
#[must_use]
pub fn status_label(row: &TableRow) -> String {
    match row.status {
        VersionStatus::UpToDate => "up to date".to_owned(),
        VersionStatus::UpdateAvailable => {
            format!("outdated ({} -> {})", row.current, row.latest)
        }
        VersionStatus::Unavailable => "unavailable".to_owned(),
        VersionStatus::Error => format!("error ({} > {})", row.current, row.latest),
    }
}

const fn row_color(status: VersionStatus, th: &Theme) -> ratatui::style::Color {
    match status {
        VersionStatus::UpToDate => th.green,
        VersionStatus::UpdateAvailable => th.yellow,
        VersionStatus::Unavailable | VersionStatus::Error => th.red,
    }
}

/// Lines for one section: heading, framed header and one line per row.
#[must_use]
pub fn section_lines(table: &SectionTable, th: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(table.rows.len() + 6);
    lines.push(Line::from(Span::styled(
        table.section.title().to_owned(),
        Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
    )));
    let frame = Style::default().fg(th.overlay1);
    lines.push(Line::from(Span::styled(rule("┌", "┬", "┐"), frame)));
    lines.push(Line::from(Span::styled(
        cells("Package", "Current", "Latest", "Status"),
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(rule("├", "┼", "┤"), frame)));
    for row in &table.rows {
        lines.push(Line::from(Span::styled(
            cells(&row.name, &row.current, &row.latest, &status_label(row)),
            Style::default().fg(row_color(row.status, th)),
        )));
    }
    lines.push(Line::from(Span::styled(rule("└", "┴", "┘"), frame)));
    lines.push(Line::from(""));
    lines
}

/// Total line count [`section_lines`] will produce for `tables`.
///
/// Used by the scroll handler so the offset cannot run past the content.
#[must_use]
pub fn rendered_line_count(tables: &[SectionTable]) -> usize {
    tables.iter().map(|t| t.rows.len() + 6).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Section;
    use crate::theme::theme;

    fn sample() -> SectionTable {
        SectionTable {
            section: Section::Dependencies,
            rows: vec![
                TableRow {
                    name: "react".into(),
                    current: "18.2.0".into(),
                    latest: "19.0.0".into(),
                    status: VersionStatus::UpdateAvailable,
                },
                TableRow {
                    name: "left-pad".into(),
                    current: "1.3.0".into(),
                    latest: "1.3.0".into(),
                    status: VersionStatus::UpToDate,
                },
            ],
        }
    }

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.clone()).collect()
    }

    #[test]
    /// What: Section lines carry heading, frame and one line per row.
    ///
    /// - Input: Two-row dependencies table
    /// - Output: Eight lines; heading first, blank line last
    fn section_produces_the_expected_line_shape() {
        let lines = section_lines(&sample(), &theme());
        assert_eq!(lines.len(), 8);
        assert_eq!(text_of(&lines[0]), "Dependencies");
        assert!(text_of(&lines[1]).starts_with('┌'));
        assert!(text_of(&lines[2]).contains("Package"));
        assert!(text_of(&lines[7]).is_empty());
    }

    #[test]
    /// What: Status labels spell out the comparison outcome.
    ///
    /// - Input: One row per status variant
    /// - Output: Labels for up to date, outdated, unavailable and error
    fn status_labels_cover_every_variant() {
        let mut row = TableRow {
            name: "pkg".into(),
            current: "2.0.0".into(),
            latest: "2.0.0".into(),
            status: VersionStatus::UpToDate,
        };
        assert_eq!(status_label(&row), "up to date");

        row.latest = "3.0.0".into();
        row.status = VersionStatus::UpdateAvailable;
        assert_eq!(status_label(&row), "outdated (2.0.0 -> 3.0.0)");

        row.latest = crate::compare::UNAVAILABLE.into();
        row.status = VersionStatus::Unavailable;
        assert_eq!(status_label(&row), "unavailable");

        row.latest = "1.0.0".into();
        row.status = VersionStatus::Error;
        assert_eq!(status_label(&row), "error (2.0.0 > 1.0.0)");
    }

    #[test]
    /// What: Every body line of a table has the same display width.
    ///
    /// - Input: Sample table
    /// - Output: Frame and cell lines all measure identically
    fn all_framed_lines_share_one_width() {
        use unicode_width::UnicodeWidthStr;
        let lines = section_lines(&sample(), &theme());
        let widths: Vec<usize> = lines[1..7]
            .iter()
            .map(|l| text_of(l).width())
            .collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    /// What: The line count helper matches what the builder emits.
    ///
    /// - Input: Two tables of different sizes
    /// - Output: Sum of per-table line counts
    fn line_count_matches_the_builder() {
        let one = sample();
        let mut two = sample();
        two.section = Section::DevDependencies;
        two.rows.pop();
        let tables = vec![one, two];
        let built: usize = tables
            .iter()
            .map(|t| section_lines(t, &theme()).len())
            .sum();
        assert_eq!(rendered_line_count(&tables), built);
    }

    #[test]
    /// What: The status cell is centered while the name cell is left-aligned.
    ///
    /// - Input: Up-to-date row with a short name
    /// - Output: Name flush left, status flanked by balanced padding
    fn status_column_is_centered() {
        let mut table = sample();
        table.rows.truncate(1);
        table.rows[0].status = VersionStatus::UpToDate;
        let lines = section_lines(&table, &theme());
        let row = text_of(&lines[4]);
        assert!(row.starts_with("│ react "));
        let status_cell = row.split('│').nth(4).unwrap_or_default();
        assert_eq!(status_cell.trim(), "up to date");
        let left = status_cell.len() - status_cell.trim_start().len();
        let right = status_cell.len() - status_cell.trim_end().len();
        assert!(left.abs_diff(right) <= 1, "cell {status_cell:?}");
    }

    #[test]
    /// What: Overlong package names are truncated with an ellipsis.
    ///
    /// - Input: A 60-character package name
    /// - Output: Row line keeps the standard width
    fn long_names_do_not_widen_the_table() {
        use unicode_width::UnicodeWidthStr;
        let mut table = sample();
        table.rows[0].name = "a".repeat(60);
        let lines = section_lines(&table, &theme());
        let header = text_of(&lines[2]).width();
        let row = text_of(&lines[4]).width();
        assert_eq!(header, row);
    }
}
