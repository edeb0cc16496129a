//! Input mode state machine types.
//!
//! This module defines the enums controlling how keyboard input is
//! interpreted: plain list navigation, live search, or the entry form used
//! to create and edit todos. The active mode also determines the footer
//! hints and which UI overlays are drawn.
//!
//! # State Machine
//!
//! - **Normal**: navigation and single-key commands
//! - **Search**: live query editing or result navigation
//! - **Form**: entry form open in create or edit mode
//!
//! The form's CLOSED state is simply any non-`Form` input mode; opening the
//! form transitions into `Form(FormMode::Create)` or
//! `Form(FormMode::Edit(id))`, and both submit and cancel transition back
//! to `Normal`.

use crate::domain::TodoId;

/// Focus state within search mode.
///
/// Determines whether keystrokes edit the query or navigate the filtered
/// results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Every printable character edits the query and live-filters the list.
    Typing,

    /// User is navigating through filtered results.
    ///
    /// Accepts the normal-mode row commands (toggle, edit, delete) while
    /// the query stays applied.
    Navigating,
}

/// Entry form target.
///
/// Distinguishes creating a new todo from editing an existing one. The
/// editing id doubles as the "editing-id" view state: `Create` means none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Form opened empty; submit appends a new todo.
    Create,

    /// Form opened pre-filled from the identified todo; submit replaces its
    /// text. The buffer re-syncs from the store while the form is open.
    Edit(TodoId),
}

/// Current input handling mode.
///
/// Controls which keybindings are active, the footer text, and which
/// overlays (search box, entry form) are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Keybindings: j/k (navigate), Space (toggle), a (add), e (edit),
    /// d (delete), / (search), Tab (cycle filter), t (theme), q (quit).
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),

    /// Entry form open, capturing text input.
    Form(FormMode),
}

impl InputMode {
    /// Whether the entry form is currently open.
    #[must_use]
    pub const fn form_open(self) -> bool {
        matches!(self, Self::Form(_))
    }

    /// The id currently being edited, or `None` in create mode or with the
    /// form closed.
    #[must_use]
    pub const fn editing_id(self) -> Option<TodoId> {
        match self {
            Self::Form(FormMode::Edit(id)) => Some(id),
            _ => None,
        }
    }
}
