//! Footer component renderer.
//!
//! Renders the footer help bar with centered, mode-specific keybinding
//! hints in dimmed styling.

use crate::ui::helpers::{centered_line, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// Hints longer than the pane width are truncated to avoid wrapping on
/// narrow panes. Returns the next available row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text: String = footer.keybindings.chars().take(cols).collect();

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", centered_line(&help_text, cols));
    print!("{}", Theme::reset());
    row + 1
}
