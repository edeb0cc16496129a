//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the ztodo library
//! and the Zellij plugin system. It implements the `ZellijPlugin` trait to
//! handle Zellij events and lifecycle.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` and `Timer` events
//! 3. **Update**: Handle events, delegate to library layer
//! 4. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! Zellij events are translated to library events based on the current
//! input mode:
//!
//! - `Key(Down)` → `Event::KeyDown`
//! - `Key(Enter)` → `Event::SubmitForm` (in form mode)
//! - `Key(Esc)` → `Event::ExitSearch` (in search mode)
//! - `Timer` → `Event::Tick` (toast expiry sweep)
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! In normal mode:
//! - `j`/`Down`: Move down
//! - `k`/`Up`: Move up
//! - `Space`: Toggle completion of selected todo
//! - `a`: Add a new todo
//! - `e`: Edit selected todo (incomplete todos only)
//! - `d`: Delete selected todo
//! - `/`: Enter search mode
//! - `Tab`: Cycle completion filter
//! - `t`: Toggle light/dark theme
//! - `q`: Close plugin
//!
//! In search mode (typing):
//! - Printable keys: Type into the search query
//! - `Enter`/`Down`/`Up`: Move focus to the filtered results
//! - `Esc`: Exit search and clear the query
//!
//! In search mode (navigating results):
//! - `j`/`k`/`Space`/`e`/`d`: Act on the selected result
//! - `/`: Return to the search input
//! - `Esc`: Exit search and clear the query
//!
//! In form mode:
//! - Printable keys: Type into the text field
//! - `Enter`: Submit (Apply/Update)
//! - `Esc`: Cancel without saving

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use ztodo::{handle_event, Action, Config, Event, InputMode, SearchFocus};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the Zellij plugin lifecycle.
struct State {
    /// Core application state from library layer.
    app: ztodo::app::AppState,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: ztodo::initialize(&default_config),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Called once during plugin startup. Parses configuration, initializes
    /// tracing and application state, requests permissions, and subscribes
    /// to events.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `ChangeApplicationState`: Hide the plugin pane on `q`
    ///
    /// # Subscriptions
    ///
    /// - `Key`: Keyboard input
    /// - `Timer`: Toast notification expiry
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        ztodo::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        self.app = ztodo::initialize(&config);
        tracing::debug!("app state initialized");

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::ChangeApplicationState]);

        tracing::debug!("subscribing to events");
        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to `handle_event`,
    /// and executes resulting actions. Returns `true` if the UI should re-render.
    ///
    /// # Parameters
    ///
    /// * `event` - Zellij event to process
    ///
    /// # Returns
    ///
    /// - `true` if the plugin UI should re-render
    /// - `false` if the event was ignored or resulted in no state changes
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        tracing::debug!(event = %event_name, "processing event");

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_) => Event::Tick,
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                Self::handle_permission_result(permissions);
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Delegates to the library's rendering layer.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in rows
    /// * `cols` - Terminal width in columns
    fn render(&mut self, rows: usize, cols: usize) {
        ztodo::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    ///
    /// The mapping depends on the current input mode: in the form and the
    /// search input, printable keys insert text; elsewhere they are commands.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        match self.app.input_mode {
            InputMode::Form(_) => Self::map_form_key(key),
            InputMode::Search(SearchFocus::Typing) => Self::map_search_typing_key(key),
            InputMode::Search(SearchFocus::Navigating) => Self::map_search_navigating_key(key),
            InputMode::Normal => Self::map_normal_key(key),
        }
    }

    /// Key mapping while the entry form is open.
    fn map_form_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Enter => Event::SubmitForm,
            BareKey::Esc => Event::Escape,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Key mapping while typing in the search input.
    fn map_search_typing_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Enter => Event::FocusResults,
            BareKey::Esc => Event::ExitSearch,
            BareKey::Backspace => Event::Backspace,
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Key mapping while navigating filtered search results.
    fn map_search_navigating_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Char(' ') => Event::ToggleSelected,
            BareKey::Char('e') => Event::OpenEditForm,
            BareKey::Char('d') => Event::DeleteSelected,
            BareKey::Char('/') => Event::FocusSearchBar,
            BareKey::Esc => Event::ExitSearch,
            _ => return None,
        })
    }

    /// Key mapping in normal mode.
    fn map_normal_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Char(' ') => Event::ToggleSelected,
            BareKey::Char('a') => Event::OpenCreateForm,
            BareKey::Char('e') => Event::OpenEditForm,
            BareKey::Char('d') => Event::DeleteSelected,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Tab => Event::CycleFilter,
            BareKey::Char('t') => Event::ToggleTheme,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Esc => Event::Escape,
            _ => return None,
        })
    }

    /// Handles permission request results.
    fn handle_permission_result(permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted");
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - closing the pane with 'q' will not work");
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Hide the plugin pane
    /// - `ScheduleToastExpiry`: Arm a Zellij timer for toast dismissal
    ///
    /// # Parameters
    ///
    /// * `action` - Action to execute
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::ScheduleToastExpiry { seconds } => {
                tracing::debug!(seconds = seconds, "scheduling toast expiry timer");
                set_timeout(*seconds);
            }
        }
    }
}
