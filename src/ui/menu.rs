//! Menu screen: banner, entry list and key hints.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, MenuId};
use crate::theme::theme;

/// Block-letter "DVP" drawn above the root menu.
const BANNER: [&str; 6] = [
    "██████╗░ ██╗░░░██╗ ██████╗░",
    "██╔══██╗ ██║░░░██║ ██╔══██╗",
    "██║░░██║ ╚██╗░██╔╝ ██████╔╝",
    "██║░░██║ ░╚████╔╝░ ██╔═══╝░",
    "██████╔╝ ░░╚██╔╝░░ ██║░░░░░",
    "╚═════╝░ ░░░╚═╝░░░ ╚═╝░░░░░",
];

/// Draw the banner and whichever menu is current.
pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    // Banner
    let mut banner: Vec<Line> = BANNER
        .iter()
        .map(|row| {
            Line::from(Span::styled(
                *row,
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    banner.push(Line::from(Span::styled(
        concat!("Dependency Version Patrol  v", env!("CARGO_PKG_VERSION")),
        Style::default().fg(th.overlay1),
    )));
    banner.push(Line::from(""));
    banner.push(Line::from(vec![
        Span::styled("Manifest: ", Style::default().fg(th.subtext1)),
        Span::styled(
            app.store.path().display().to_string(),
            Style::default().fg(th.text),
        ),
    ]));
    f.render_widget(
        Paragraph::new(banner)
            .alignment(Alignment::Center)
            .style(Style::default().bg(th.base)),
        chunks[0],
    );

    // Entries, highlight drawn by hand
    let lines: Vec<Line> = app
        .menu
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            if i == app.menu.selected {
                Line::from(Span::styled(
                    format!("⮞ {}", entry.label),
                    Style::default()
                        .fg(th.base)
                        .bg(th.lavender)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", entry.label),
                    Style::default().fg(th.text),
                ))
            }
        })
        .collect();

    let list = Paragraph::new(lines).style(Style::default().bg(th.base)).block(
        Block::default()
            .title(Span::styled(menu_title(app), Style::default().fg(th.overlay1)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface1)),
    );
    f.render_widget(list, chunks[1]);

    let hints = Line::from(Span::styled(
        "↑/↓ move   Enter select   Esc back   Ctrl+C quit",
        Style::default().fg(th.subtext1),
    ));
    f.render_widget(
        Paragraph::new(hints).style(Style::default().bg(th.base)),
        chunks[2],
    );
}

fn menu_title(app: &AppState) -> String {
    match app.menu.current() {
        MenuId::Home => " Main menu ".to_owned(),
        MenuId::Update => " Update dependencies ".to_owned(),
        MenuId::Section => app.menu.active_section.map_or_else(
            || " Update section ".to_owned(),
            |section| format!(" Update {} ", section.key()),
        ),
    }
}
