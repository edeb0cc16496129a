//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single shared state container for
//! the plugin. It owns the authoritative [`TodoStore`], all ephemeral view
//! state (input mode, search query, completion filter, entry form buffer,
//! theme mode, toast queue), and the derived visible subsequence. Every
//! component reads through this one container; the active event handler is
//! the only writer, so no locking discipline is needed.
//!
//! # Derived state
//!
//! `visible` is recomputed by [`apply_filters`](AppState::apply_filters)
//! after every store or filter-criteria mutation, synchronously, so no
//! intermediate inconsistent state is ever observable. The selection index
//! is clamped to the visible bounds in the same pass.
//!
//! # View model computation
//!
//! [`compute_viewmodel`](AppState::compute_viewmodel) transforms a state
//! snapshot into a renderable representation, handling windowing around the
//! selection, row truncation, and overlay composition (search box, entry
//! form, toasts, empty state).

use super::modes::{FormMode, InputMode, SearchFocus};
use super::notifications::Notifications;
use crate::domain::{visible_todos, CompletionFilter, Todo, TodoStore};
use crate::ui::theme::{Theme, ThemeMode, ThemeSet};
use crate::ui::viewmodel::{
    EmptyState, FooterInfo, FormInfo, HeaderInfo, SearchBarInfo, TodoRow, UiViewModel,
};

/// Central application state container.
///
/// Mutated by the event handler in response to user input and timer events.
/// View models are computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Authoritative ordered sequence of todos.
    pub store: TodoStore,

    /// Todos matching the current completion filter and search query.
    ///
    /// Recomputed by `apply_filters()` after every state change that can
    /// affect it. Used for rendering and selection bounds checking.
    pub visible: Vec<Todo>,

    /// Zero-based index of the selected row within `visible`.
    ///
    /// Clamped to valid bounds by `apply_filters()`. Wraps around during
    /// navigation.
    pub selected_index: usize,

    /// Current input handling mode (normal / search / entry form).
    pub input_mode: InputMode,

    /// Entry form input buffer.
    ///
    /// Pre-filled from the todo text when the form opens in edit mode and
    /// re-synced by `sync_form_input()` while it stays open.
    pub form_input: String,

    /// Current search query, applied live on every edit.
    pub search_query: String,

    /// Current three-way completion filter.
    pub completion_filter: CompletionFilter,

    /// Current display mode (light / dark). Presentation only.
    pub theme_mode: ThemeMode,

    /// Light and dark palettes resolved at initialization.
    themes: ThemeSet,

    /// Live toast notifications.
    pub notifications: Notifications,
}

impl AppState {
    /// Creates a new application state with an empty store.
    ///
    /// # Parameters
    ///
    /// * `themes` - Resolved light/dark palettes
    /// * `theme_mode` - Starting display mode
    /// * `notification_ttl_secs` - Toast time-to-live in seconds
    #[must_use]
    pub fn new(themes: ThemeSet, theme_mode: ThemeMode, notification_ttl_secs: f64) -> Self {
        Self {
            store: TodoStore::new(),
            visible: vec![],
            selected_index: 0,
            input_mode: InputMode::Normal,
            form_input: String::new(),
            search_query: String::new(),
            completion_filter: CompletionFilter::All,
            theme_mode,
            themes,
            notifications: Notifications::new(notification_ttl_secs),
        }
    }

    /// Returns the palette for the current theme mode.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        self.themes.for_mode(self.theme_mode)
    }

    /// Flips between the light and dark display modes.
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        tracing::debug!(mode = ?self.theme_mode, "theme toggled");
    }

    /// Moves the selection down by one row, wrapping to the top.
    ///
    /// No-op if the visible list is empty.
    pub fn move_selection_down(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.visible.len();
    }

    /// Moves the selection up by one row, wrapping to the bottom.
    ///
    /// No-op if the visible list is empty.
    pub fn move_selection_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.visible.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the currently selected todo, if any row is visible.
    #[must_use]
    pub fn selected_todo(&self) -> Option<&Todo> {
        self.visible.get(self.selected_index)
    }

    /// Recomputes the visible subsequence from the store and filter state.
    ///
    /// Applies the completion filter first, then the case-insensitive
    /// substring search, both order-preserving. Clamps the selection index
    /// to the new bounds.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filters",
            total = self.store.todos().len(),
            query_len = self.search_query.len(),
            filter = ?self.completion_filter
        )
        .entered();

        self.visible = visible_todos(
            self.store.todos(),
            self.completion_filter,
            &self.search_query,
        )
        .into_iter()
        .cloned()
        .collect();

        if self.visible.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.visible.len() - 1);
        }

        tracing::debug!(visible = self.visible.len(), "filters applied");
    }

    /// Re-syncs the entry form buffer with the underlying todo.
    ///
    /// While the form is open in edit mode, the buffer reflects the todo's
    /// current text even if the sequence mutates underneath it; the handler
    /// calls this after every store mutation. A deleted editing target
    /// leaves the buffer as-is. No-op in create mode or with the form
    /// closed.
    pub fn sync_form_input(&mut self) {
        if let InputMode::Form(FormMode::Edit(id)) = self.input_mode {
            if let Some(todo) = self.store.get(id) {
                if self.form_input != todo.text {
                    tracing::debug!(todo_id = %id, "form buffer re-synced from store");
                    self.form_input = todo.text.clone();
                }
            }
        }
    }

    /// Computes a renderable view model from current state and pane size.
    ///
    /// Handles windowing (centering the selection in the available rows),
    /// row truncation to the pane width, and overlay composition.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UiViewModel {
        let available_rows = self.available_list_rows(rows).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.visible.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && self.visible.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_rows: Vec<TodoRow> = self.visible[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, todo)| {
                self.compute_row(todo, visible_start + relative_idx, cols)
            })
            .collect();

        UiViewModel {
            selected_index: self.selected_index.saturating_sub(visible_start),
            empty_state: if display_rows.is_empty() {
                Some(self.compute_empty_state())
            } else {
                None
            },
            rows: display_rows,
            header: self.compute_header(),
            footer: self.compute_footer(),
            search_bar: self.compute_search_bar(),
            form: self.compute_form(),
            toasts: self
                .notifications
                .messages()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Computes a display row for one visible todo.
    ///
    /// Truncates text to fit next to the checkbox and affordance columns.
    /// The edit affordance is absent for completed todos.
    fn compute_row(&self, todo: &Todo, absolute_idx: usize, cols: usize) -> TodoRow {
        // 1 left margin + 4 checkbox + 3 affordance hint + 1 right margin.
        const ROW_CHROME: usize = 9;

        let max_text_width = cols.saturating_sub(ROW_CHROME).max(4);
        let text = if todo.text.chars().count() > max_text_width {
            let kept: String = todo.text.chars().take(max_text_width - 3).collect();
            format!("{kept}...")
        } else {
            todo.text.clone()
        };

        TodoRow {
            text,
            is_completed: todo.is_completed,
            is_selected: absolute_idx == self.selected_index,
            can_edit: !todo.is_completed,
        }
    }

    /// Computes the header title from the filter and counts.
    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(
                " Todo list · {} ({}/{}) ",
                self.completion_filter.label(),
                self.visible.len(),
                self.store.todos().len()
            ),
        }
    }

    /// Computes the footer keybinding hints for the active mode.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: to results  Type to filter".to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k: navigate  Space: toggle  e: edit  d: delete"
                    .to_string()
            }
            InputMode::Form(FormMode::Create) => {
                "ESC: Cancel  Enter: Apply  Type your text".to_string()
            }
            InputMode::Form(FormMode::Edit(_)) => {
                "ESC: Cancel  Enter: Update  Type your text".to_string()
            }
            InputMode::Normal => {
                "j/k: navigate  Space: toggle  a: add  e: edit  d: delete  /: search  Tab: filter  t: theme  q: quit"
                    .to_string()
            }
        };

        FooterInfo { keybindings }
    }

    /// Computes search box state when search mode is active.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.search_query.clone(),
            })
        } else {
            None
        }
    }

    /// Computes entry form state while the form is open.
    fn compute_form(&self) -> Option<FormInfo> {
        match self.input_mode {
            InputMode::Form(FormMode::Create) => Some(FormInfo {
                title: "New Todo".to_string(),
                input: self.form_input.clone(),
                submit_label: "Apply".to_string(),
            }),
            InputMode::Form(FormMode::Edit(_)) => Some(FormInfo {
                title: "Edit Todo".to_string(),
                input: self.form_input.clone(),
                submit_label: "Update".to_string(),
            }),
            _ => None,
        }
    }

    /// Computes the empty state message when no rows are visible.
    fn compute_empty_state(&self) -> EmptyState {
        if self.store.todos().is_empty() {
            EmptyState {
                message: "No todos yet".to_string(),
                subtitle: "Press 'a' to add your first todo".to_string(),
            }
        } else {
            EmptyState {
                message: "No matching todos".to_string(),
                subtitle: "Adjust the search or filter".to_string(),
            }
        }
    }

    /// Rows available for the list after subtracting UI chrome.
    ///
    /// Accounts for the blank top line, header, two borders and the footer
    /// (5 rows), plus the 3-row search box when search mode is active.
    const fn available_list_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Search(_) => total_rows.saturating_sub(8),
            InputMode::Normal | InputMode::Form(_) => total_rows.saturating_sub(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state() -> AppState {
        AppState::new(ThemeSet::builtin(), ThemeMode::Dark, 3.0)
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut state = new_state();
        state.store.append("one");
        state.store.append("two");
        state.apply_filters();

        state.move_selection_up();
        assert_eq!(state.selected_index, 1);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn apply_filters_clamps_selection() {
        let mut state = new_state();
        state.store.append("one");
        state.store.append("two");
        state.apply_filters();
        state.selected_index = 1;

        state.search_query = "one".to_string();
        state.apply_filters();
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.visible.len(), 1);
    }

    #[test]
    fn viewmodel_hides_edit_affordance_for_completed_rows() {
        let mut state = new_state();
        let id = state.store.append("Write spec").unwrap();
        state.store.toggle_completed(id);
        state.apply_filters();

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.rows.len(), 1);
        assert!(vm.rows[0].is_completed);
        assert!(!vm.rows[0].can_edit);
    }

    #[test]
    fn viewmodel_reports_empty_store_and_filtered_out_differently() {
        let mut state = new_state();
        state.apply_filters();
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.unwrap().message, "No todos yet");

        state.store.append("hidden");
        state.search_query = "zzz".to_string();
        state.apply_filters();
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.unwrap().message, "No matching todos");
    }

    #[test]
    fn viewmodel_truncates_long_text() {
        let mut state = new_state();
        state.store.append(&"x".repeat(200));
        state.apply_filters();

        let vm = state.compute_viewmodel(24, 40);
        assert!(vm.rows[0].text.chars().count() <= 31);
        assert!(vm.rows[0].text.ends_with("..."));
    }

    #[test]
    fn windowing_keeps_selection_visible_on_small_panes() {
        let mut state = new_state();
        for i in 0..50 {
            state.store.append(&format!("todo {i}"));
        }
        state.apply_filters();
        state.selected_index = 49;

        let vm = state.compute_viewmodel(10, 80);
        assert!(vm.selected_index < vm.rows.len());
        assert_eq!(vm.rows[vm.selected_index].text, "todo 49");
    }

    #[test]
    fn sync_form_input_tracks_external_text_changes() {
        let mut state = new_state();
        let id = state.store.append("Old").unwrap();
        state.apply_filters();

        state.input_mode = InputMode::Form(FormMode::Edit(id));
        state.form_input = "Old".to_string();

        state.store.update(id, "New");
        state.sync_form_input();
        assert_eq!(state.form_input, "New");
    }

    #[test]
    fn sync_form_input_leaves_buffer_when_target_deleted() {
        let mut state = new_state();
        let id = state.store.append("Old").unwrap();
        state.input_mode = InputMode::Form(FormMode::Edit(id));
        state.form_input = "Old draft".to_string();

        state.store.remove(id);
        state.sync_form_input();
        assert_eq!(state.form_input, "Old draft");
    }

    #[test]
    fn theme_toggle_switches_palettes() {
        let mut state = new_state();
        assert_eq!(state.theme().name, "dark");
        state.toggle_theme();
        assert_eq!(state.theme().name, "light");
    }
}
