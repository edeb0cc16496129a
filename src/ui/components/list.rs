//! Todo list component renderer.
//!
//! Renders the visible todos as interactive rows: a checkbox glyph
//! reflecting completion, the text (dimmed and struck through when
//! completed), and a per-row affordance hint column. The edit affordance
//! is absent for completed rows; delete is always present.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TodoRow;

/// Checkbox glyph for completed todos.
const CHECKBOX_DONE: &str = "[x]";
/// Checkbox glyph for incomplete todos.
const CHECKBOX_OPEN: &str = "[ ]";

/// Renders all todo rows starting at the specified row.
///
/// Returns the next available row position.
pub fn render_rows(row: usize, items: &[TodoRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single todo row.
///
/// Layout:
///
/// ```text
/// [1sp] [x] text ................ e d [1sp]
/// ```
///
/// The affordance column shows `e d` for editable rows and only `d` for
/// completed ones. Selected rows take the full-width selection background.
fn render_row(row: usize, item: &TodoRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!(" ");

    if item.is_completed {
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.checkbox_done_fg));
        }
        print!("{CHECKBOX_DONE} ");
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.text_completed));
        }
        print!("{}", Theme::strikethrough());
        print!("{}", item.text);
        // Strikethrough must not bleed into the padding.
        print!("\u{001b}[29m");
    } else {
        print!("{CHECKBOX_OPEN} ");
        print!("{}", item.text);
    }

    let hints = if item.can_edit { "e d" } else { "  d" };
    let used = 1 + 4 + item.text.chars().count();
    let padding = cols.saturating_sub(used + hints.len() + 1);
    print!("{}", " ".repeat(padding));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{hints} ");

    print!("{}", Theme::reset());
    row + 1
}
