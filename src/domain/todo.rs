//! Todo record and its strongly-typed identifier.
//!
//! This module defines the core [`Todo`] type, a single task with display
//! text and a completion flag, and [`TodoId`], the opaque identifier used
//! for row identity and targeted mutations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque unique identifier for a [`Todo`].
///
/// Ids are handed out by the store's monotonic counter, so they are unique
/// for the process lifetime by construction. The numeric value is an
/// implementation detail; callers treat the id as an opaque token and the
/// `Display` impl renders it as a short one (`t1`, `t2`, ...) for logs.
///
/// # Examples
///
/// ```
/// use ztodo::domain::TodoStore;
///
/// let mut store = TodoStore::new();
/// let a = store.append("Buy milk").unwrap();
/// let b = store.append("Write report").unwrap();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(pub(crate) u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// A single task record.
///
/// Invariants maintained by [`TodoStore`](crate::domain::TodoStore):
///
/// - `id` is unique within the store for the process lifetime
/// - `text` is only ever set to non-empty values (empty submissions are
///   rejected before construction)
/// - `is_completed` toggles independently of text edits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, assigned on append and never reused.
    pub id: TodoId,
    /// Display text. Non-empty and pre-trimmed.
    pub text: String,
    /// Completion flag. New todos start incomplete.
    pub is_completed: bool,
}

impl Todo {
    /// Creates a new incomplete todo.
    ///
    /// Only the store constructs todos; text validation happens there.
    pub(crate) fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            is_completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_starts_incomplete() {
        let todo = Todo::new(TodoId(7), "Water plants".to_string());
        assert!(!todo.is_completed);
        assert_eq!(todo.text, "Water plants");
    }

    #[test]
    fn id_displays_as_short_token() {
        assert_eq!(TodoId(42).to_string(), "t42");
    }
}
