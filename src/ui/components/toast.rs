//! Toast notification component renderer.
//!
//! Renders live toasts as right-aligned, stacked one-line pills just above
//! the footer border. Toasts are purely cosmetic overlays; they are drawn
//! last so they sit on top of list rows.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

/// Right margin between a toast and the pane edge.
const TOAST_MARGIN: usize = 2;

/// Renders the toast stack bottom-up above the footer area.
///
/// The newest toast sits closest to the footer. Toasts that would run past
/// the top of the list area are dropped from display (they remain queued
/// and reappear as older ones expire).
pub fn render_toasts(toasts: &[String], theme: &Theme, rows: usize, cols: usize) {
    if toasts.is_empty() {
        return;
    }

    // Bottom-most toast row: just above the footer border.
    let bottom_row = rows.saturating_sub(3);

    for (i, message) in toasts.iter().rev().enumerate() {
        let Some(row) = bottom_row.checked_sub(i) else {
            break;
        };
        if row <= 2 {
            break;
        }

        let pill = format!(" {message} ");
        let pill_len = pill.chars().count().min(cols);
        let col = cols.saturating_sub(pill_len + TOAST_MARGIN) + 1;

        position_cursor(row, col);
        print!("{}", Theme::fg(&theme.colors.toast_fg));
        print!("{}", Theme::bg(&theme.colors.toast_bg));
        print!("{pill}");
        print!("{}", Theme::reset());
    }
}
