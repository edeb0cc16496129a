//! Top-level rendering coordinator.
//!
//! Provides the main rendering entry point: compute the view model from
//! application state, draw the base layout for the active mode, then draw
//! the overlays (entry form, toasts) on top.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UiViewModel;

/// Renders the plugin UI to stdout.
///
/// Computes the view model and delegates to the mode-specific layout, then
/// layers the entry form and toast overlays. Prints ANSI-styled output via
/// `print!`; does not clear the screen or manage the cursor beyond explicit
/// positioning.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, state.theme(), rows, cols);
}

/// Renders a pre-computed view model.
fn render_viewmodel(vm: &UiViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(search) = &vm.search_bar {
        components::render_search_mode(vm, search, theme, cols, rows);
    } else {
        components::render_normal_mode(vm, theme, cols, rows);
    }

    if let Some(form) = &vm.form {
        components::render_form(form, theme, rows, cols);
    }

    components::render_toasts(&vm.toasts, theme, rows, cols);
}
