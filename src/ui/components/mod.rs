//! Composable UI component renderers.
//!
//! Each component renders one part of the interface; the layout functions
//! here compose them per mode.
//!
//! # Components
//!
//! - [`header`]: Title bar with filter label and counts
//! - [`footer`]: Mode-specific keybinding hints
//! - [`search`]: Search input box (shown in search mode)
//! - [`list`]: Todo rows with checkbox, text, and affordance hints
//! - [`form`]: Entry form overlay (create / edit)
//! - [`toast`]: Stacked transient notifications
//! - [`empty`]: Empty state message
//!
//! # Layout Modes
//!
//! - [`render_normal_mode`]: Header + List + Footer
//! - [`render_search_mode`]: Header + Search box + List + Footer
//!
//! Overlays (entry form, toasts) are drawn by the renderer after the base
//! layout.

mod empty;
mod footer;
mod form;
mod header;
mod list;
mod search;
mod toast;

pub use empty::render_empty_state;
pub use form::render_form;
pub use toast::render_toasts;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, UiViewModel};

use footer::render_footer;
use header::render_header;
use list::render_rows;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row position.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the list area: rows, or the empty state when nothing is visible.
fn render_list_area(row: usize, vm: &UiViewModel, theme: &Theme, cols: usize) {
    if let Some(empty) = &vm.empty_state {
        render_empty_state(row, empty, theme, cols);
    } else {
        render_rows(row, &vm.rows, theme, cols);
    }
}

/// Renders the normal mode layout (no search box).
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Todo rows / empty state]
/// [Border]
/// [Footer]
/// ```
pub fn render_normal_mode(vm: &UiViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Skip the blank line at row 1.

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    render_list_area(current_row, vm, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the search mode layout (with the search box).
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Box - 3 lines]
/// [Todo rows / empty state]
/// [Border]
/// [Footer]
/// ```
pub fn render_search_mode(
    vm: &UiViewModel,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // Skip the blank line at row 1.

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, search, theme, cols);
    render_list_area(current_row, vm, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
