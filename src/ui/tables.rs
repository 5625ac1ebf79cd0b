//! Results screen: one framed table per manifest section.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::TablesView;
use crate::theme::theme;

use super::table;

/// Draw the check results with a clamped vertical scroll.
pub fn render(f: &mut Frame, view: &TablesView, area: Rect) {
    let th = theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    for section in &view.tables {
        lines.extend(table::section_lines(section, &th));
    }

    let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let visible = chunks[0].height.saturating_sub(2);
    let max_scroll = total.saturating_sub(visible);
    let offset = view.scroll.min(max_scroll);

    let body = Paragraph::new(lines)
        .style(Style::default().bg(th.base))
        .scroll((offset, 0))
        .block(
            Block::default()
                .title(Span::styled(
                    " Version check ",
                    Style::default().fg(th.overlay1),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface1)),
        );
    f.render_widget(body, chunks[0]);

    let hints = Line::from(Span::styled(
        "↑/↓ scroll   Enter/Esc/q back   Ctrl+C quit",
        Style::default().fg(th.subtext1),
    ));
    f.render_widget(
        Paragraph::new(hints).style(Style::default().bg(th.base)),
        chunks[1],
    );
}
