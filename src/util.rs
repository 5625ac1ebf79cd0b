//! Small text helpers shared by the table and list renderers.

use unicode_width::UnicodeWidthStr;

/// What: Fit `text` into exactly `width` display columns, left-aligned.
///
/// Inputs:
/// - `text`: cell content
/// - `width`: target display width in columns
///
/// Output:
/// - `text` padded with spaces, or truncated with a trailing `…` when wider
///   than `width`.
pub fn pad_cell(text: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(text);
    if w <= width {
        let mut out = String::with_capacity(text.len() + (width - w));
        out.push_str(text);
        out.push_str(&" ".repeat(width - w));
        return out;
    }
    truncate_to(text, width.saturating_sub(1), width)
}

/// What: Fit `text` into exactly `width` display columns, centered.
///
/// Inputs:
/// - `text`: cell content
/// - `width`: target display width in columns
///
/// Output:
/// - `text` with the surplus split between leading and trailing spaces;
///   truncated like [`pad_cell`] when too wide.
pub fn center_cell(text: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(text);
    if w > width {
        return truncate_to(text, width.saturating_sub(1), width);
    }
    let pad = width - w;
    let left = pad / 2;
    let right = pad - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Cut `text` down to `keep` columns, append `…`, then pad to `width`.
fn truncate_to(text: &str, keep: usize, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let cw = UnicodeWidthStr::width(ch.to_string().as_str());
        if used + cw > keep {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    /// Short content is padded out to the exact column width.
    #[test]
    fn pad_cell_pads_short_content() {
        let cell = pad_cell("left-pad", 12);
        assert_eq!(cell, "left-pad    ");
        assert_eq!(UnicodeWidthStr::width(cell.as_str()), 12);
    }

    /// Oversized content is truncated with an ellipsis, keeping the width.
    #[test]
    fn pad_cell_truncates_long_content() {
        let cell = pad_cell("a-very-long-package-name", 10);
        assert_eq!(UnicodeWidthStr::width(cell.as_str()), 10);
        assert!(cell.contains('…'));
    }

    /// Centering splits the surplus between both sides.
    #[test]
    fn center_cell_centers_content() {
        assert_eq!(center_cell("ok", 6), "  ok  ");
        assert_eq!(center_cell("odd", 6), " odd  ");
    }

    /// Zero-width targets do not panic and stay within bounds.
    #[test]
    fn degenerate_widths_are_safe() {
        assert_eq!(UnicodeWidthStr::width(pad_cell("x", 1).as_str()), 1);
        assert_eq!(center_cell("", 0), "");
    }
}
