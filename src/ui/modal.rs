//! Modal overlays: confirmation prompts and notices.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::Modal;
use crate::theme::{Theme, theme};

/// Paint whichever modal is open; a closed modal paints nothing.
pub fn render(f: &mut Frame, modal: &Modal, area: Rect) {
    let th = theme();
    match modal {
        Modal::None => {}
        Modal::Confirm { message, .. } => {
            overlay(f, area, &th, " Confirm ", message, "y = yes    n = no", th.mauve);
        }
        Modal::Notice { message } => {
            overlay(
                f,
                area,
                &th,
                " Notice ",
                message,
                "Press any key to continue",
                th.sapphire,
            );
        }
    }
}

fn overlay(
    f: &mut Frame,
    area: Rect,
    th: &Theme,
    title: &str,
    message: &str,
    hint: &str,
    accent: ratatui::style::Color,
) {
    let w = if area.width > 20 {
        (area.width - 10).min(70)
    } else {
        area.width
    };
    let h = 7_u16.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    let rect = Rect {
        x,
        y,
        width: w,
        height: h,
    };
    f.render_widget(Clear, rect);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_owned(),
            Style::default().fg(th.text),
        )),
        Line::from(""),
        Line::from(Span::styled(hint.to_owned(), Style::default().fg(th.subtext1))),
    ];
    let boxw = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    title.to_owned(),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(accent))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(boxw, rect);
}
