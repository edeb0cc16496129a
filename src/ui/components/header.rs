//! Header component renderer.
//!
//! Renders the title bar: application name, active completion filter, and
//! visible/total counts, centered with bold theme styling.

use crate::ui::helpers::{centered_line, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// The title is centered and padded to fill the pane width so an optional
/// header background covers the whole line. Returns the next available row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", centered_line(&header.title, cols));

    print!("{}", Theme::reset());
    row + 1
}
