//! User interface rendering layer with component-based architecture.
//!
//! This module turns view models into ANSI-styled output through composable
//! rendering components, with two-valued light/dark theme support.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UiViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities
//! - [`theme`]: Light/dark palettes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{Theme, ThemeMode, ThemeSet};
pub use viewmodel::{
    EmptyState, FooterInfo, FormInfo, HeaderInfo, SearchBarInfo, TodoRow, UiViewModel,
};
