//! Domain layer for the ztodo plugin.
//!
//! This module contains the core domain types and business rules for the
//! todo list, independent of Zellij-specific APIs or rendering concerns.
//! The store owns the authoritative todo sequence; the visible subsequence
//! is derived from it by a pure filter function.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`todo`]: The `Todo` record and its strongly-typed identifier
//! - [`store`]: The in-memory ordered todo sequence and its mutations
//! - [`filter`]: Completion filter and search matching

pub mod error;
pub mod filter;
pub mod store;
pub mod todo;

pub use error::{Result, ZtodoError};
pub use filter::{visible_todos, CompletionFilter};
pub use store::TodoStore;
pub use todo::{Todo, TodoId};
