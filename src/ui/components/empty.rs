//! Empty state component renderer.
//!
//! Renders the centered two-line message shown in the list area when no
//! todos are visible, either because the store is empty or because the
//! active filters hide everything.

use crate::ui::helpers::{centered_line, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message inside the list area.
///
/// The message and subtitle are placed two rows into the area so they sit
/// visually centered between header and footer on typical pane heights.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    position_cursor(row + 2, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", centered_line(&empty.message, cols));
    print!("{}", Theme::reset());

    position_cursor(row + 3, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", centered_line(&empty.subtitle, cols));
    print!("{}", Theme::reset());
}
