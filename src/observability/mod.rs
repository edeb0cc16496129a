//! File-based tracing for the plugin.
//!
//! Zellij plugins have no terminal of their own to log to, so the tracing
//! subscriber writes plain-text events to a file under the plugin data
//! directory instead. The pipeline is:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → ~/.local/share/zellij/ztodo/ztodo.log
//! ```
//!
//! Trace level is controlled via the `trace_level` plugin configuration
//! option (default `"info"`). Initialization is optional and best-effort:
//! if the data directory or log file cannot be created the plugin runs
//! without tracing.

mod init;

pub use init::init_tracing;
