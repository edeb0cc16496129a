//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and timer events, translating them into state changes and action
//! sequences. It is the primary control flow coordinator: every store
//! mutation happens synchronously inside one of these arms, followed
//! immediately by re-derivation of the visible subsequence, so the user
//! never observes an intermediate inconsistent state.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Row commands**: `ToggleSelected`, `OpenEditForm`, `DeleteSelected`
//! - **Entry form**: `OpenCreateForm`, `Char`, `Backspace`, `SubmitForm`,
//!   `Escape`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`,
//!   `ExitSearch`
//! - **View**: `CycleFilter`, `ToggleTheme`
//! - **System**: `Tick` (toast expiry), `CloseFocus`

use super::modes::{FormMode, InputMode, SearchFocus};
use super::{Action, AppState};
use crate::domain::error::Result;

/// Events triggered by user input or timers.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes them sequentially.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the selection down by one row (wraps to top).
    KeyDown,
    /// Moves the selection up by one row (wraps to bottom).
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// Flips the completion flag of the selected todo.
    ToggleSelected,
    /// Opens the entry form in create mode with an empty buffer.
    OpenCreateForm,
    /// Opens the entry form in edit mode for the selected todo.
    ///
    /// Ignored when the selected todo is completed; the edit affordance is
    /// hidden for completed rows.
    OpenEditForm,
    /// Removes the selected todo and fires a "deleted" toast.
    DeleteSelected,
    /// Submits the entry form (append in create mode, update in edit mode).
    SubmitForm,

    /// Enters search mode with typing focus and a cleared query.
    SearchMode,
    /// Refocuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Moves focus from the search input to the filtered results.
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,

    /// Appends a character to the active text buffer (query or form).
    Char(char),
    /// Removes the last character from the active text buffer.
    Backspace,
    /// Cancels the entry form, or exits search, depending on mode.
    Escape,

    /// Cycles the completion filter: All → Completed → In-completed.
    CycleFilter,
    /// Flips between the light and dark themes.
    ToggleTheme,

    /// Timer fired; sweeps expired toast notifications.
    Tick,
}

/// Processes an event, mutates application state, and returns actions.
///
/// # Returns
///
/// A `(should_render, actions)` pair: whether the UI must re-render, and
/// the side effects for the plugin runtime to execute in sequence.
///
/// # Errors
///
/// Store operations are total, so current arms always succeed; the `Result`
/// keeps the signature open for fallible effects.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::ToggleSelected => {
            let Some(todo) = state.selected_todo() else {
                tracing::debug!("no todo selected to toggle");
                return Ok((false, vec![]));
            };
            let id = todo.id;

            state.store.toggle_completed(id);
            state.sync_form_input();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::OpenCreateForm => {
            tracing::debug!("opening entry form in create mode");
            state.input_mode = InputMode::Form(FormMode::Create);
            state.form_input.clear();
            Ok((true, vec![]))
        }
        Event::OpenEditForm => {
            let Some(todo) = state.selected_todo() else {
                tracing::debug!("no todo selected to edit");
                return Ok((false, vec![]));
            };
            if todo.is_completed {
                tracing::debug!(todo_id = %todo.id, "completed todos are not editable");
                return Ok((false, vec![]));
            }
            let id = todo.id;
            let text = todo.text.clone();

            tracing::debug!(todo_id = %id, "opening entry form in edit mode");
            state.form_input = text;
            state.input_mode = InputMode::Form(FormMode::Edit(id));
            Ok((true, vec![]))
        }
        Event::DeleteSelected => {
            let Some(todo) = state.selected_todo() else {
                tracing::debug!("no todo selected to delete");
                return Ok((false, vec![]));
            };
            let id = todo.id;

            if !state.store.remove(id) {
                return Ok((false, vec![]));
            }

            let ttl = state.notifications.push("Todo has been deleted!");
            state.apply_filters();
            Ok((true, vec![Action::ScheduleToastExpiry { seconds: ttl }]))
        }
        Event::SubmitForm => {
            let InputMode::Form(form_mode) = state.input_mode else {
                return Ok((false, vec![]));
            };

            // Empty submissions are ignored and the form stays open.
            if state.form_input.trim().is_empty() {
                tracing::debug!("ignoring empty form submission");
                return Ok((false, vec![]));
            }

            let mut actions = vec![];
            match form_mode {
                FormMode::Create => {
                    if state.store.append(&state.form_input).is_some() {
                        let ttl = state.notifications.push("New Todo added!");
                        actions.push(Action::ScheduleToastExpiry { seconds: ttl });
                    }
                }
                FormMode::Edit(id) => {
                    // A stale editing id is silently ignored: no toast, but
                    // the form still closes and the editing id clears.
                    if state.store.update(id, &state.form_input) {
                        let ttl = state.notifications.push("Todo updated");
                        actions.push(Action::ScheduleToastExpiry { seconds: ttl });
                    }
                }
            }

            state.input_mode = InputMode::Normal;
            state.form_input.clear();
            state.apply_filters();
            Ok((true, actions))
        }

        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query.clear();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                state.apply_filters();
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.search_query.clear();
            state.apply_filters();
            Ok((true, vec![]))
        }

        Event::Char(c) => match state.input_mode {
            InputMode::Search(_) => {
                state.search_query.push(*c);
                tracing::trace!(query = %state.search_query, "search query updated");
                state.apply_filters();
                Ok((true, vec![]))
            }
            InputMode::Form(_) => {
                state.form_input.push(*c);
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search(_) => {
                state.search_query.pop();
                state.apply_filters();
                Ok((true, vec![]))
            }
            InputMode::Form(_) => {
                state.form_input.pop();
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Escape => match state.input_mode {
            InputMode::Form(_) => {
                // Cancel: close without mutating the store.
                tracing::debug!("entry form cancelled");
                state.input_mode = InputMode::Normal;
                state.form_input.clear();
                Ok((true, vec![]))
            }
            InputMode::Search(_) => {
                state.input_mode = InputMode::Normal;
                state.search_query.clear();
                state.apply_filters();
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },

        Event::CycleFilter => {
            state.completion_filter = state.completion_filter.cycled();
            tracing::debug!(filter = ?state.completion_filter, "completion filter cycled");
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ToggleTheme => {
            state.toggle_theme();
            Ok((true, vec![]))
        }

        Event::Tick => {
            let removed = state.notifications.sweep(chrono::Utc::now());
            Ok((removed > 0, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CompletionFilter;
    use crate::ui::theme::{ThemeMode, ThemeSet};

    fn new_state() -> AppState {
        AppState::new(ThemeSet::builtin(), ThemeMode::Dark, 3.0)
    }

    fn dispatch(state: &mut AppState, event: Event) -> Vec<Action> {
        handle_event(state, &event).expect("handler is total").1
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            dispatch(state, Event::Char(c));
        }
    }

    fn create_todo(state: &mut AppState, text: &str) {
        dispatch(state, Event::OpenCreateForm);
        type_text(state, text);
        dispatch(state, Event::SubmitForm);
    }

    #[test]
    fn create_flow_appends_and_notifies() {
        let mut state = new_state();

        dispatch(&mut state, Event::OpenCreateForm);
        assert!(state.input_mode.form_open());

        type_text(&mut state, "Write spec");
        let actions = dispatch(&mut state, Event::SubmitForm);

        assert_eq!(state.store.todos().len(), 1);
        assert_eq!(state.store.todos()[0].text, "Write spec");
        assert!(!state.store.todos()[0].is_completed);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.form_input.is_empty());
        assert_eq!(state.notifications.messages(), vec!["New Todo added!"]);
        assert!(matches!(
            actions.as_slice(),
            [Action::ScheduleToastExpiry { .. }]
        ));
    }

    #[test]
    fn empty_submission_keeps_form_open() {
        let mut state = new_state();
        dispatch(&mut state, Event::OpenCreateForm);
        type_text(&mut state, "   ");

        let (should_render, actions) = handle_event(&mut state, &Event::SubmitForm).unwrap();
        assert!(!should_render);
        assert!(actions.is_empty());
        assert!(state.input_mode.form_open());
        assert!(state.store.todos().is_empty());
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn cancel_closes_without_mutating() {
        let mut state = new_state();
        create_todo(&mut state, "Keep me");

        dispatch(&mut state, Event::OpenEditForm);
        type_text(&mut state, " with edits");
        dispatch(&mut state, Event::Escape);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.form_input.is_empty());
        assert_eq!(state.store.todos()[0].text, "Keep me");
    }

    #[test]
    fn edit_flow_updates_and_notifies() {
        let mut state = new_state();
        create_todo(&mut state, "Old");
        state.notifications.sweep(chrono::Utc::now() + chrono::Duration::days(1));

        dispatch(&mut state, Event::OpenEditForm);
        assert_eq!(state.form_input, "Old");
        assert!(state.input_mode.editing_id().is_some());

        type_text(&mut state, " text");
        dispatch(&mut state, Event::SubmitForm);

        assert_eq!(state.store.todos()[0].text, "Old text");
        assert_eq!(state.input_mode.editing_id(), None);
        assert_eq!(state.notifications.messages(), vec!["Todo updated"]);
    }

    #[test]
    fn completed_todos_cannot_be_edited() {
        let mut state = new_state();
        create_todo(&mut state, "Done thing");
        dispatch(&mut state, Event::ToggleSelected);

        let (should_render, _) = handle_event(&mut state, &Event::OpenEditForm).unwrap();
        assert!(!should_render);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn toggle_emits_no_notification() {
        let mut state = new_state();
        create_todo(&mut state, "Task");
        state.notifications.sweep(chrono::Utc::now() + chrono::Duration::days(1));

        dispatch(&mut state, Event::ToggleSelected);
        assert!(state.store.todos()[0].is_completed);
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn toggle_then_delete_lifecycle() {
        // append("Write spec") → toggle → edit affordance absent → remove.
        let mut state = new_state();
        create_todo(&mut state, "Write spec");
        assert_eq!(state.visible.len(), 1);
        assert!(!state.visible[0].is_completed);

        dispatch(&mut state, Event::ToggleSelected);
        assert!(state.visible[0].is_completed);
        let vm = state.compute_viewmodel(24, 80);
        assert!(!vm.rows[0].can_edit);

        dispatch(&mut state, Event::DeleteSelected);
        assert!(state.store.todos().is_empty());
        assert!(state
            .notifications
            .messages()
            .contains(&"Todo has been deleted!"));
    }

    #[test]
    fn incomplete_filter_hides_newly_completed_todo() {
        // Two items "Alpha" and "Beta"; filter=in-completed; toggling
        // "Alpha" to completed leaves only "Beta" visible.
        let mut state = new_state();
        create_todo(&mut state, "Alpha");
        create_todo(&mut state, "Beta");

        dispatch(&mut state, Event::CycleFilter); // Completed
        dispatch(&mut state, Event::CycleFilter); // In-completed
        assert_eq!(state.completion_filter, CompletionFilter::Incomplete);
        assert_eq!(state.visible.len(), 2);

        state.selected_index = 0; // "Alpha"
        dispatch(&mut state, Event::ToggleSelected);

        let texts: Vec<_> = state.visible.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Beta"]);
    }

    #[test]
    fn open_edit_form_reflects_external_mutation() {
        // The form must re-display text changed underneath it, not a stale
        // copy captured at open time.
        let mut state = new_state();
        create_todo(&mut state, "Old");
        let id = state.store.todos()[0].id;

        dispatch(&mut state, Event::OpenEditForm);
        assert_eq!(state.form_input, "Old");

        state.store.update(id, "New");
        state.sync_form_input();
        assert_eq!(state.form_input, "New");

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.form.unwrap().input, "New");
    }

    #[test]
    fn search_filters_live_and_clears_on_exit() {
        let mut state = new_state();
        create_todo(&mut state, "Buy Milk");
        create_todo(&mut state, "Write report");

        dispatch(&mut state, Event::SearchMode);
        type_text(&mut state, "MILK");
        assert_eq!(state.visible.len(), 1);
        assert_eq!(state.visible[0].text, "Buy Milk");

        dispatch(&mut state, Event::Backspace);
        assert_eq!(state.search_query, "MIL");

        dispatch(&mut state, Event::ExitSearch);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.search_query.is_empty());
        assert_eq!(state.visible.len(), 2);
    }

    #[test]
    fn focus_results_with_empty_query_returns_to_normal() {
        let mut state = new_state();
        dispatch(&mut state, Event::SearchMode);
        dispatch(&mut state, Event::FocusResults);
        assert_eq!(state.input_mode, InputMode::Normal);

        dispatch(&mut state, Event::SearchMode);
        type_text(&mut state, "x");
        dispatch(&mut state, Event::FocusResults);
        assert_eq!(
            state.input_mode,
            InputMode::Search(SearchFocus::Navigating)
        );
    }

    #[test]
    fn submit_label_matches_form_mode() {
        let mut state = new_state();
        dispatch(&mut state, Event::OpenCreateForm);
        assert_eq!(
            state.compute_viewmodel(24, 80).form.unwrap().submit_label,
            "Apply"
        );
        dispatch(&mut state, Event::Escape);

        create_todo(&mut state, "Task");
        dispatch(&mut state, Event::OpenEditForm);
        assert_eq!(
            state.compute_viewmodel(24, 80).form.unwrap().submit_label,
            "Update"
        );
    }

    #[test]
    fn delete_with_nothing_selected_is_ignored() {
        let mut state = new_state();
        let (should_render, actions) = handle_event(&mut state, &Event::DeleteSelected).unwrap();
        assert!(!should_render);
        assert!(actions.is_empty());
    }

    #[test]
    fn quit_emits_close_focus() {
        let mut state = new_state();
        let actions = dispatch(&mut state, Event::CloseFocus);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn tick_requests_render_only_when_toasts_expire() {
        let mut state = new_state();
        let (should_render, _) = handle_event(&mut state, &Event::Tick).unwrap();
        assert!(!should_render);

        state.notifications = crate::app::notifications::Notifications::new(0.0);
        state.notifications.push("New Todo added!");
        std::thread::sleep(std::time::Duration::from_millis(5));
        let (should_render, _) = handle_event(&mut state, &Event::Tick).unwrap();
        assert!(should_render);
    }
}
