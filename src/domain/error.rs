//! Error types for the ztodo plugin.
//!
//! This module defines the centralized error type [`ZtodoError`] and a type
//! alias [`Result`] for convenient error handling throughout the plugin.
//! Errors cover the plumbing around the todo list (themes, configuration,
//! I/O); store operations themselves are total and never fail, invalid
//! operations are silent no-ops by design.

use thiserror::Error;

/// The main error type for ztodo plugin operations.
///
/// Consolidates the error conditions that can occur outside the store:
/// theme loading, configuration parsing, and filesystem access for the
/// trace log. I/O errors convert automatically via `#[from]`.
///
/// # Examples
///
/// ```
/// use ztodo::domain::ZtodoError;
///
/// fn validate_config() -> Result<(), ZtodoError> {
///     Err(ZtodoError::Config("unknown theme name".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum ZtodoError {
    /// Theme parsing or loading failed.
    ///
    /// Occurs when a built-in palette is unknown or a custom TOML palette
    /// cannot be read or parsed. The string describes what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configuration value from Zellij is malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, chiefly around
    /// the trace log file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for ztodo operations.
///
/// Type alias for `std::result::Result<T, ZtodoError>` to simplify function
/// signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ZtodoError>;
