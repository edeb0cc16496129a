//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application
//! state. View models are optimized for rendering: rows are pre-truncated,
//! selection and edit affordances are pre-resolved, and optional overlays
//! (search box, entry form, toasts, empty state) are present only when they
//! should be drawn. They contain no business logic.

/// Complete UI view model for one frame.
///
/// Computed by `AppState::compute_viewmodel()` and consumed by the
/// renderer.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Todo rows visible in the current window, in sequence order.
    pub rows: Vec<TodoRow>,

    /// Index of the selected row within `rows`.
    pub selected_index: usize,

    /// Header information (title, filter, counts).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Search box state, present only in search mode.
    pub search_bar: Option<SearchBarInfo>,

    /// Entry form state, present only while the form is open.
    pub form: Option<FormInfo>,

    /// Live toast messages, oldest first.
    pub toasts: Vec<String>,

    /// Empty state message when no rows are visible.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single todo row.
#[derive(Debug, Clone)]
pub struct TodoRow {
    /// Display text, truncated to the available width.
    pub text: String,

    /// Whether the todo is completed (checkbox glyph, strikethrough).
    pub is_completed: bool,

    /// Whether this row is currently selected.
    pub is_selected: bool,

    /// Whether the edit affordance is shown. Always false for completed
    /// todos.
    pub can_edit: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, including the active filter label and visible count.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the active mode.
    pub keybindings: String,
}

/// Search box display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}

/// Entry form display information.
///
/// Rendered as a centered overlay box while the form is open.
#[derive(Debug, Clone)]
pub struct FormInfo {
    /// Box title ("New Todo" or "Edit Todo").
    pub title: String,

    /// Current input buffer contents.
    pub input: String,

    /// Submit action label: "Apply" in create mode, "Update" in edit mode.
    pub submit_label: String,
}

/// Empty state message display information.
///
/// Shown in the list area when the visible subsequence is empty, either
/// because the store is empty or because filters hide everything.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No todos yet").
    pub message: String,

    /// Secondary explanatory text (e.g., "Press 'a' to add one").
    pub subtitle: String,
}
