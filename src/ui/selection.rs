//! Package picker: tick packages inside one section.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::SelectionView;
use crate::theme::theme;

/// Draw the picker list with tick marks and the cursor highlight.
pub fn render(f: &mut Frame, view: &SelectionView, area: Rect) {
    let th = theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let lines: Vec<Line> = view
        .packages
        .iter()
        .enumerate()
        .map(|(i, (name, version))| {
            let ticked = view.marked.contains(name);
            let mark = if ticked { "◆" } else { "◇" };
            let cursor = if i == view.cursor { "⮞" } else { " " };
            let text = format!("{cursor} {mark} {name}  {version}");
            let style = if i == view.cursor {
                Style::default()
                    .fg(th.base)
                    .bg(th.lavender)
                    .add_modifier(Modifier::BOLD)
            } else if ticked {
                Style::default().fg(th.green)
            } else {
                Style::default().fg(th.text)
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    let ticked = view.marked.len();
    let list = Paragraph::new(lines).style(Style::default().bg(th.base)).block(
        Block::default()
            .title(Span::styled(
                format!(" Pick packages in {} ({ticked} selected) ", view.section.key()),
                Style::default().fg(th.overlay1),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface1)),
    );
    f.render_widget(list, chunks[0]);

    let hints = Line::from(Span::styled(
        "↑/↓ move   Space tick   Enter confirm   Esc cancel",
        Style::default().fg(th.subtext1),
    ));
    f.render_widget(
        Paragraph::new(hints).style(Style::default().bg(th.base)),
        chunks[1],
    );
}
