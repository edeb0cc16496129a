//! In-memory todo store.
//!
//! This module defines [`TodoStore`], the authoritative ordered sequence of
//! todos for the session. All mutations are synchronous and total: invalid
//! inputs (empty text, unknown ids) are silent no-ops rather than errors,
//! reported to the caller only through the boolean/optional return values
//! used to decide on notifications and re-rendering.
//!
//! # Id generation
//!
//! Ids come from a monotonic per-store counter, so uniqueness holds for the
//! process lifetime without any collision probability. The counter is never
//! decremented, even when todos are removed.

use super::todo::{Todo, TodoId};

/// The authoritative in-memory ordered sequence of todos.
///
/// The sequence length changes only via [`append`](Self::append) (+1) and
/// [`remove`](Self::remove) (-1); [`update`](Self::update) and
/// [`toggle_completed`](Self::toggle_completed) never change it.
///
/// # Examples
///
/// ```
/// use ztodo::domain::TodoStore;
///
/// let mut store = TodoStore::new();
/// let id = store.append("Write spec").unwrap();
/// store.toggle_completed(id);
/// assert!(store.todos()[0].is_completed);
/// store.remove(id);
/// assert!(store.todos().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl TodoStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the full ordered sequence.
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Looks up a todo by id.
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Appends a new incomplete todo with the given text.
    ///
    /// The text is trimmed before validation. Empty or whitespace-only text
    /// is rejected and the sequence is left unchanged.
    ///
    /// # Returns
    ///
    /// - `Some(TodoId)` of the freshly created todo
    /// - `None` if the text was empty after trimming
    pub fn append(&mut self, text: &str) -> Option<TodoId> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("rejecting empty todo text");
            return None;
        }

        let id = TodoId(self.next_id);
        self.next_id += 1;
        self.todos.push(Todo::new(id, text.to_string()));

        tracing::debug!(todo_id = %id, total = self.todos.len(), "todo appended");
        Some(id)
    }

    /// Replaces the text of the todo with the given id.
    ///
    /// No-op when the id is unknown or the new text is empty after trimming.
    /// Does not touch the completion flag.
    ///
    /// # Returns
    ///
    /// `true` if a todo was actually mutated.
    pub fn update(&mut self, id: TodoId, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!(todo_id = %id, "rejecting empty update text");
            return false;
        }

        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.text = text.to_string();
                tracing::debug!(todo_id = %id, "todo updated");
                true
            }
            None => {
                tracing::debug!(todo_id = %id, "update target not found, ignoring");
                false
            }
        }
    }

    /// Flips the completion flag of the todo with the given id.
    ///
    /// No-op when the id is unknown. Applying this twice returns the flag
    /// to its original value.
    ///
    /// # Returns
    ///
    /// `true` if a todo was actually toggled.
    pub fn toggle_completed(&mut self, id: TodoId) -> bool {
        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.is_completed = !todo.is_completed;
                tracing::debug!(todo_id = %id, is_completed = todo.is_completed, "todo toggled");
                true
            }
            None => {
                tracing::debug!(todo_id = %id, "toggle target not found, ignoring");
                false
            }
        }
    }

    /// Removes the todo with the given id from the sequence.
    ///
    /// Exactly the matching todo is filtered out; unknown ids are ignored.
    ///
    /// # Returns
    ///
    /// `true` if a todo was actually removed.
    pub fn remove(&mut self, id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        let removed = self.todos.len() < before;

        if removed {
            tracing::debug!(todo_id = %id, total = self.todos.len(), "todo removed");
        } else {
            tracing::debug!(todo_id = %id, "remove target not found, ignoring");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_creates_incomplete_todo_with_fresh_id() {
        let mut store = TodoStore::new();
        let id = store.append("Buy Milk").expect("non-empty text");

        assert_eq!(store.todos().len(), 1);
        let todo = store.get(id).unwrap();
        assert_eq!(todo.text, "Buy Milk");
        assert!(!todo.is_completed);
    }

    #[test]
    fn append_rejects_empty_and_whitespace_text() {
        let mut store = TodoStore::new();
        assert!(store.append("").is_none());
        assert!(store.append("   \t").is_none());
        assert!(store.todos().is_empty());
    }

    #[test]
    fn ids_are_unique_across_removals() {
        let mut store = TodoStore::new();
        let a = store.append("Alpha").unwrap();
        store.remove(a);
        let b = store.append("Beta").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn length_changes_only_via_append_and_remove() {
        let mut store = TodoStore::new();
        let id = store.append("Task").unwrap();
        assert_eq!(store.todos().len(), 1);

        store.update(id, "Renamed task");
        store.toggle_completed(id);
        store.toggle_completed(id);
        assert_eq!(store.todos().len(), 1);

        store.remove(id);
        assert_eq!(store.todos().len(), 0);
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut store = TodoStore::new();
        let id = store.append("Task").unwrap();

        store.toggle_completed(id);
        assert!(store.get(id).unwrap().is_completed);
        store.toggle_completed(id);
        assert!(!store.get(id).unwrap().is_completed);
    }

    #[test]
    fn update_preserves_completion_flag() {
        let mut store = TodoStore::new();
        let id = store.append("Old").unwrap();
        store.toggle_completed(id);

        assert!(store.update(id, "New"));
        let todo = store.get(id).unwrap();
        assert_eq!(todo.text, "New");
        assert!(todo.is_completed);
    }

    #[test]
    fn update_rejects_empty_text() {
        let mut store = TodoStore::new();
        let id = store.append("Keep me").unwrap();
        assert!(!store.update(id, "  "));
        assert_eq!(store.get(id).unwrap().text, "Keep me");
    }

    #[test]
    fn stale_ids_are_silently_ignored() {
        let mut store = TodoStore::new();
        let id = store.append("Task").unwrap();
        store.remove(id);

        assert!(!store.update(id, "anything"));
        assert!(!store.toggle_completed(id));
        assert!(!store.remove(id));
        assert!(store.todos().is_empty());
    }

    #[test]
    fn append_trims_surrounding_whitespace() {
        let mut store = TodoStore::new();
        let id = store.append("  padded  ").unwrap();
        assert_eq!(store.get(id).unwrap().text, "padded");
    }

    #[test]
    fn order_is_preserved_across_mutations() {
        let mut store = TodoStore::new();
        let a = store.append("Alpha").unwrap();
        let b = store.append("Beta").unwrap();
        let c = store.append("Gamma").unwrap();

        store.toggle_completed(b);
        store.remove(a);

        let ids: Vec<_> = store.todos().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![b, c]);
    }
}
