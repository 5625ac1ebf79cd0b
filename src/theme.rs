//! Color palette for the TUI.
//!
//! One small, opinionated scheme used throughout the user interface. Colors
//! are grouped into neutrals (base/mantle/surface), overlays/subtexts, and
//! accents for highlighting and semantic states.

use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind modals.
    pub mantle: Color,
    /// Subtle surface color for highlighted rows.
    pub surface1: Color,
    /// Muted line/border color.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for hints and captions.
    pub subtext1: Color,
    /// Accent for the highlighted menu row and up-to-date rows.
    pub sapphire: Color,
    /// Accent for modal headings.
    pub mauve: Color,
    /// Success state color.
    pub green: Color,
    /// Warning/attention state color (updates available).
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent for borders and the banner.
    pub lavender: Color,
}

/// The palette. One fixed scheme; terminals without 24-bit color quantize.
pub const fn theme() -> Theme {
    Theme {
        base: Color::Rgb(30, 30, 46),
        mantle: Color::Rgb(24, 24, 37),
        surface1: Color::Rgb(69, 71, 90),
        overlay1: Color::Rgb(127, 132, 156),
        text: Color::Rgb(205, 214, 244),
        subtext1: Color::Rgb(186, 194, 222),
        sapphire: Color::Rgb(116, 199, 236),
        mauve: Color::Rgb(203, 166, 247),
        green: Color::Rgb(166, 227, 161),
        yellow: Color::Rgb(249, 226, 175),
        red: Color::Rgb(243, 139, 168),
        lavender: Color::Rgb(180, 190, 254),
    }
}
