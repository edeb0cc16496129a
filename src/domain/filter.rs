//! Completion filter and search matching.
//!
//! This module derives the displayed subsequence of todos from the full
//! sequence, given a three-way completion filter and a live search query.
//! The derivation is a pure, order-preserving function: the completion
//! filter is applied first, then the search query intersects it.

use super::todo::Todo;

/// Three-way view selector for the todo list.
///
/// Determines which todos are visible before search filtering. The display
/// labels follow the selector of the original surface ("All" / "Completed"
/// / "In-completed").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionFilter {
    /// Every todo passes.
    #[default]
    All,
    /// Only completed todos pass.
    Completed,
    /// Only incomplete todos pass.
    Incomplete,
}

impl CompletionFilter {
    /// Returns the next filter in the cycle All → Completed → In-completed.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::All => Self::Completed,
            Self::Completed => Self::Incomplete,
            Self::Incomplete => Self::All,
        }
    }

    /// Display label for the header and footer.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Completed => "Completed",
            Self::Incomplete => "In-completed",
        }
    }

    /// Whether a todo passes this filter.
    #[must_use]
    pub const fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Completed => todo.is_completed,
            Self::Incomplete => !todo.is_completed,
        }
    }
}

/// Derives the visible subsequence of todos, order-preserving.
///
/// The completion filter is applied first; a non-empty search query then
/// keeps only todos whose text contains the query as a case-insensitive
/// substring. An empty query applies no text filter.
///
/// # Examples
///
/// ```
/// use ztodo::domain::{visible_todos, CompletionFilter, TodoStore};
///
/// let mut store = TodoStore::new();
/// store.append("Buy Milk");
/// store.append("Write report");
///
/// let visible = visible_todos(store.todos(), CompletionFilter::All, "milk");
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].text, "Buy Milk");
/// ```
#[must_use]
pub fn visible_todos<'a>(
    todos: &'a [Todo],
    filter: CompletionFilter,
    search: &str,
) -> Vec<&'a Todo> {
    let query = search.to_lowercase();

    todos
        .iter()
        .filter(|todo| filter.matches(todo))
        .filter(|todo| query.is_empty() || todo.text.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TodoStore;

    fn sample_store() -> TodoStore {
        let mut store = TodoStore::new();
        let milk = store.append("Buy Milk").unwrap();
        store.append("Write report");
        store.append("Call the bank");
        store.toggle_completed(milk);
        store
    }

    #[test]
    fn all_filter_passes_everything() {
        let store = sample_store();
        assert_eq!(
            visible_todos(store.todos(), CompletionFilter::All, "").len(),
            3
        );
    }

    #[test]
    fn completed_and_incomplete_partition_the_sequence() {
        let store = sample_store();
        let completed = visible_todos(store.todos(), CompletionFilter::Completed, "");
        let incomplete = visible_todos(store.todos(), CompletionFilter::Incomplete, "");

        let mut union: Vec<_> = completed.iter().chain(&incomplete).map(|t| t.id).collect();
        union.sort_by_key(|id| id.to_string());
        let mut base: Vec<_> = visible_todos(store.todos(), CompletionFilter::All, "")
            .iter()
            .map(|t| t.id)
            .collect();
        base.sort_by_key(|id| id.to_string());

        assert_eq!(union, base);
        assert!(completed.iter().all(|t| !incomplete.contains(t)));
    }

    #[test]
    fn search_is_case_insensitive_substring_match() {
        let store = sample_store();
        let by_lower = visible_todos(store.todos(), CompletionFilter::All, "milk");
        let by_upper = visible_todos(store.todos(), CompletionFilter::All, "BUY");

        assert_eq!(by_lower.len(), 1);
        assert_eq!(by_lower[0].text, "Buy Milk");
        assert_eq!(by_upper.len(), 1);
        assert_eq!(by_upper[0].text, "Buy Milk");
    }

    #[test]
    fn search_intersects_the_completion_filter() {
        let store = sample_store();
        // "Buy Milk" is completed, so the incomplete filter hides it even
        // though the query matches.
        let visible = visible_todos(store.todos(), CompletionFilter::Incomplete, "milk");
        assert!(visible.is_empty());
    }

    #[test]
    fn empty_search_applies_no_text_filter() {
        let store = sample_store();
        let visible = visible_todos(store.todos(), CompletionFilter::Incomplete, "");
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn order_is_preserved() {
        let mut store = TodoStore::new();
        store.append("b one");
        store.append("a two");
        store.append("b three");

        let visible = visible_todos(store.todos(), CompletionFilter::All, "b");
        let texts: Vec<_> = visible.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["b one", "b three"]);
    }

    #[test]
    fn filter_cycle_wraps_around() {
        let start = CompletionFilter::All;
        assert_eq!(start.cycled().cycled().cycled(), start);
    }
}
