//! ztodo: a Zellij plugin for keeping a quick in-pane todo list.
//!
//! ztodo renders a keyboard-driven todo list in a plugin pane:
//! - Add, edit, complete, and delete short text tasks
//! - Live case-insensitive substring search
//! - Three-way completion filter (All / Completed / In-completed)
//! - Light/dark theme toggle with TOML-defined palettes
//! - Transient toast notifications for add/update/delete
//!
//! All state lives in memory for the lifetime of the pane session; there is
//! no persistence and no background work.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and action dispatching            │
//! │  - View model computation                           │
//! │  - Toast notification queue                         │
//! └─────────────────────────────────────────────────────┘
//!          │                          │
//! ┌──────────────────┐      ┌──────────────────┐
//! │ Domain (domain/) │      │ UI Layer (ui/)   │
//! │ - Todo store     │      │ - Rendering      │
//! │ - Filter/search  │      │ - Theming        │
//! │ - Error types    │      │ - Components     │
//! └──────────────────┘      └──────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │
//! │  - Sandbox paths, file-based tracing                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Control flow
//!
//! Single-threaded and event-driven: every mutation happens synchronously
//! inside one input-event handler, and the visible subsequence is re-derived
//! before the handler returns. The only time-bounded behavior is toast
//! auto-dismissal, driven by Zellij timers, which never touches the data
//! model.
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/ztodo.wasm" {
//!         theme "dark"
//!         notification_ttl_secs "3"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use ztodo::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! // Create a todo through the entry form.
//! handle_event(&mut state, &Event::OpenCreateForm)?;
//! for c in "Buy milk".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! handle_event(&mut state, &Event::SubmitForm)?;
//!
//! assert_eq!(state.store.todos().len(), 1);
//! # Ok::<(), ztodo::ZtodoError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, FormMode, InputMode, SearchFocus};
pub use domain::{CompletionFilter, Result, Todo, TodoId, TodoStore, ZtodoError};
pub use ui::{Theme, ThemeMode};

use std::collections::BTreeMap;
use ui::ThemeSet;

/// Default toast time-to-live in seconds.
const DEFAULT_NOTIFICATION_TTL_SECS: f64 = 3.0;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Values are provided via Zellij's KDL layout configuration and passed to
/// the plugin during initialization.
#[derive(Debug, Clone)]
pub struct Config {
    /// Starting theme mode: `"light"` or `"dark"`. Default: `"light"`.
    pub theme_name: Option<String>,

    /// Path to a custom TOML palette file.
    ///
    /// Replaces the built-in palette of the starting mode; the theme toggle
    /// still switches to the other built-in palette and back.
    pub theme_file: Option<String>,

    /// Seconds a toast notification stays on screen. Default: 3.
    pub notification_ttl_secs: f64,

    /// Tracing level: `trace`, `debug`, `info`, `warn`, `error`.
    /// Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            notification_ttl_secs: DEFAULT_NOTIFICATION_TTL_SECS,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Malformed values fall back to defaults rather than failing the
    /// plugin load.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use ztodo::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "dark".to_string());
    /// map.insert("notification_ttl_secs".to_string(), "5".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("dark"));
    /// assert!((config.notification_ttl_secs - 5.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let notification_ttl_secs = config
            .get("notification_ttl_secs")
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|ttl| *ttl > 0.0)
            .unwrap_or(DEFAULT_NOTIFICATION_TTL_SECS);

        Self {
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            notification_ttl_secs,
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Resolves the starting theme mode and palettes (built-in, or custom TOML
/// file for the starting mode) and creates an [`AppState`] with an empty
/// store, ready for event processing.
///
/// # Example
///
/// ```rust
/// use ztodo::{initialize, Config, ThemeMode};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.theme_mode, ThemeMode::Light);
/// assert!(state.store.todos().is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing ztodo plugin");

    // The original surface starts in light mode.
    let theme_mode = config
        .theme_name
        .as_deref()
        .and_then(ThemeMode::from_name)
        .unwrap_or(ThemeMode::Light);

    let mut themes = ThemeSet::builtin();
    if let Some(theme_file) = &config.theme_file {
        match Theme::from_file(theme_file) {
            Ok(theme) => themes.set_palette(theme_mode, theme),
            Err(e) => {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using built-in palette");
            }
        }
    }

    AppState::new(themes, theme_mode, config.notification_ttl_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_are_applied() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert!(config.theme_name.is_none());
        assert!((config.notification_ttl_secs - 3.0).abs() < 1e-9);
    }

    #[test]
    fn malformed_ttl_falls_back_to_default() {
        let mut map = BTreeMap::new();
        map.insert("notification_ttl_secs".to_string(), "soon".to_string());
        let config = Config::from_zellij(&map);
        assert!((config.notification_ttl_secs - 3.0).abs() < 1e-9);

        map.insert("notification_ttl_secs".to_string(), "-1".to_string());
        let config = Config::from_zellij(&map);
        assert!((config.notification_ttl_secs - 3.0).abs() < 1e-9);
    }

    #[test]
    fn initialize_honors_configured_theme() {
        let config = Config {
            theme_name: Some("dark".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_name_falls_back_to_light() {
        let config = Config {
            theme_name: Some("solarized".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme_mode, ThemeMode::Light);
    }
}
