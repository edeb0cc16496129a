//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between
//! the plugin runtime (main.rs) and the domain/UI layers. It implements the
//! event-driven architecture powering the interactive todo list.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//! ```
//!
//! All mutations happen synchronously within a single event; the visible
//! subsequence is re-derived before the handler returns.
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transitions
//! - [`modes`]: Input mode state machine types (normal / search / form)
//! - [`notifications`]: Transient toast queue with TTL expiry
//! - [`state`]: Central application state and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod notifications;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{FormMode, InputMode, SearchFocus};
pub use notifications::{Notification, Notifications};
pub use state::AppState;
