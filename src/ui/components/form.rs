//! Entry form component renderer.
//!
//! Renders the modal entry form as a centered overlay box while a todo is
//! being created or edited. Drawn after the list so it overwrites the rows
//! beneath it, which is how the single-buffer plugin drawing model layers
//! a modal.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormInfo;

/// Horizontal margin for the form box.
const FORM_BOX_MARGIN: usize = 8;

/// Renders the entry form overlay, vertically centered.
///
/// Layout:
///
/// ```text
/// [margin] ┌─ New Todo ──────────────┐ [margin]
/// [margin] │ > input text_           │ [margin]
/// [margin] └─ ESC: Cancel · Enter: Apply ─┘
/// ```
///
/// The submit label in the bottom border is "Apply" in create mode and
/// "Update" in edit mode.
pub fn render_form(form: &FormInfo, theme: &Theme, rows: usize, cols: usize) {
    let box_width = cols.saturating_sub(FORM_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let top_row = (rows / 2).saturating_sub(1).max(1);

    let title = format!("─ {} ", form.title);
    let title_len = title.chars().count().min(inner_width);
    position_cursor(top_row, 1);
    print!("{}", " ".repeat(FORM_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.form_border));
    print!("┌{title}{}┐", "─".repeat(inner_width.saturating_sub(title_len)));
    print!("{}", Theme::reset());

    let input_text = format!(" > {}_", form.input);
    let shown: String = input_text.chars().take(inner_width).collect();
    let padding = inner_width.saturating_sub(shown.chars().count());

    position_cursor(top_row + 1, 1);
    print!("{}", " ".repeat(FORM_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.form_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{shown}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.form_border));
    print!("│");
    print!("{}", Theme::reset());

    let hint = format!("─ ESC: Cancel · Enter: {} ", form.submit_label);
    let hint_len = hint.chars().count().min(inner_width);
    position_cursor(top_row + 2, 1);
    print!("{}", " ".repeat(FORM_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.form_border));
    print!("└{hint}{}┘", "─".repeat(inner_width.saturating_sub(hint_len)));
    print!("{}", Theme::reset());
}
