//! Single-line rendering for both composers.
//!
//! These functions build the complete line a display sink shows after an
//! accepted event; the sinks themselves do no layout work.

use crate::domain::{EditBuffer, Layout};

/// Full block glyph marking the cursor position in the buffer view.
pub const CURSOR_GLYPH: char = '\u{2588}';

/// The buffer with the cursor glyph spliced in, made printable by
/// escaping control characters.
pub fn buffer_line(buffer: &EditBuffer) -> String {
    format!(
        "{}{}{}",
        buffer.before_cursor(),
        CURSOR_GLYPH,
        buffer.after_cursor()
    )
    .escape_debug()
    .to_string()
}

/// The ternary composer's status line: buffer view, previewed character,
/// mode letter, and the raw digit string.
pub fn ternary_line(buffer: &EditBuffer, preview: char, mode: char, digits: &str) -> String {
    format!(
        "{}{}{}  [{}][{}|{}]",
        buffer.before_cursor(),
        CURSOR_GLYPH,
        buffer.after_cursor(),
        preview,
        mode,
        digits
    )
    .escape_debug()
    .to_string()
}

/// A layout row with the selected cell bracketed by `>`/`<` markers,
/// centered to the layout's maximum display width.
pub fn roll_line(layout: &Layout, row: usize, selected: usize) -> String {
    let labels: Vec<String> = layout.row(row).iter().map(|cell| cell.label()).collect();
    let line = format!(
        "{}>{}<{}",
        labels[..selected].join(" "),
        labels[selected],
        labels[selected + 1..].join(" ")
    );
    center(&line, layout.max_display_width())
}

fn center(line: &str, width: usize) -> String {
    let len = line.chars().count();
    if len >= width {
        return line.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), line, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reference_layout;

    #[test]
    fn test_buffer_line_places_cursor() {
        let mut buffer = EditBuffer::new("hi");
        buffer.move_right();
        assert_eq!(buffer_line(&buffer), "h\u{2588}i");
    }

    #[test]
    fn test_buffer_line_escapes_controls() {
        let buffer = EditBuffer::new("a\nb");
        assert_eq!(buffer_line(&buffer), "\u{2588}a\\nb");
    }

    #[test]
    fn test_ternary_line_format() {
        let buffer = EditBuffer::new("ok");
        assert_eq!(ternary_line(&buffer, 'A', 'E', "2102"), "\u{2588}ok  [A][E|2102]");
    }

    #[test]
    fn test_ternary_line_escapes_preview() {
        let buffer = EditBuffer::new("");
        assert_eq!(ternary_line(&buffer, '\u{1}', 'N', "0"), "\u{2588}  [\\u{1}][N|0]");
    }

    #[test]
    fn test_roll_line_markers_replace_joining_spaces() {
        let layout = reference_layout();
        // Letter row "hoeti", middle cell selected.
        let line = roll_line(&layout, 7, 2);
        assert_eq!(line.trim(), "h o>e<t i");
    }

    #[test]
    fn test_roll_line_edge_selection() {
        let layout = reference_layout();
        let line = roll_line(&layout, 7, 0);
        assert_eq!(line.trim(), ">h<o e t i");
    }

    #[test]
    fn test_roll_line_centered_to_max_width() {
        let layout = reference_layout();
        let line = roll_line(&layout, 7, 2);
        assert_eq!(line.chars().count(), layout.max_display_width());
    }

    #[test]
    fn test_center_pads_left_then_right() {
        assert_eq!(center("ab", 5), " ab  ");
        assert_eq!(center("abc", 3), "abc");
        assert_eq!(center("abcd", 2), "abcd");
    }
}
