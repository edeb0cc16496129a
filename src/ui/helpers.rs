//! Shared rendering utilities.
//!
//! Low-level helpers used across the UI components: cursor positioning and
//! width-aware centered line rendering. All output goes to stdout as ANSI
//! escape sequences, the drawing model Zellij plugins use.

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI escape sequence `\x1b[{row};{col}H`. Coordinates are
/// 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Returns a line with `text` centered in `cols` columns.
///
/// Text longer than the pane is kept as-is (the terminal clips it); shorter
/// text is padded on both sides, with the left padding taking the slack on
/// odd widths.
#[must_use]
pub fn centered_line(text: &str, cols: usize) -> String {
    let text_len = text.chars().count().min(cols);
    let padding = (cols.saturating_sub(text_len)) / 2;
    format!(
        "{}{}{}",
        " ".repeat(padding),
        text,
        " ".repeat(cols.saturating_sub(padding + text_len))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_line_pads_to_width() {
        let line = centered_line("abc", 9);
        assert_eq!(line, "   abc   ");
        assert_eq!(line.chars().count(), 9);
    }

    #[test]
    fn centered_line_handles_oversized_text() {
        let line = centered_line("abcdef", 4);
        assert!(line.starts_with("abcdef"));
    }
}
