//! Busy screen: spinner and simulated progress while lookups run.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{SPINNER_FRAMES, WorkingView};
use crate::theme::theme;

/// Cells in the progress bar.
const BAR_WIDTH: usize = 30;

/// Draw the spinner, caption and progress bar centered in `area`.
pub fn render(f: &mut Frame, view: &WorkingView, area: Rect) {
    let th = theme();
    let frame = SPINNER_FRAMES[view.frame % SPINNER_FRAMES.len()];
    let filled = usize::from(view.percent) * BAR_WIDTH / 100;
    let bar = format!(
        "{}{}  {:>3}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        view.percent
    );

    let lines = vec![
        Line::from(Span::styled(
            format!("{frame} {}", view.title),
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(bar, Style::default().fg(th.lavender))),
    ];

    let height = 3;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let rect = Rect {
        x: area.x,
        y,
        width: area.width,
        height: height.min(area.height),
    };
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(th.base)),
        rect,
    );
}
