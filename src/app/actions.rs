//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing input. Actions bridge pure state
//! transformations and the effectful Zellij shims (hiding the pane, arming
//! timers); the handler itself never calls into the runtime.

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Produced by [`handle_event`](crate::app::handle_event) and executed in
/// sequence by the plugin shim.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit (pressing 'q').
    CloseFocus,

    /// Arms a timer that fires once a toast notification is due to expire.
    ///
    /// One timer is armed per pushed toast; the resulting timer event sweeps
    /// every toast whose deadline has passed. Purely cosmetic, the data
    /// model is unaffected by toast lifetimes.
    ScheduleToastExpiry {
        /// Seconds until the toast's deadline.
        seconds: f64,
    },
}
