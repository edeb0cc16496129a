//! Transient toast notification queue.
//!
//! This module implements the fire-and-forget notification channel:
//! short-lived confirmation messages emitted after add/update/delete
//! operations. Toasts stack, auto-dismiss after a fixed TTL, and carry no
//! data dependency back into the store.
//!
//! Expiry is deadline-based: each toast records an absolute expiry
//! timestamp on push, and [`Notifications::sweep`] drops every toast whose
//! deadline has passed. The plugin shim arms one Zellij timer per pushed
//! toast, so a sweep runs at (or shortly after) each deadline.

use chrono::{DateTime, Duration, Utc};

/// A single transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Message text shown in the toast.
    pub message: String,
    /// Absolute deadline after which the toast is dismissed.
    pub expires_at: DateTime<Utc>,
}

/// Queue of live toast notifications with a shared TTL.
///
/// Oldest toasts first; rendering stacks them bottom-up above the footer.
#[derive(Debug, Clone)]
pub struct Notifications {
    queue: Vec<Notification>,
    ttl: Duration,
}

impl Notifications {
    /// Creates an empty queue with the given time-to-live per toast.
    ///
    /// Non-positive TTLs are clamped to one millisecond so a pushed toast
    /// is at least observable until the next sweep.
    #[must_use]
    pub fn new(ttl_secs: f64) -> Self {
        let millis = (ttl_secs * 1000.0) as i64;
        Self {
            queue: Vec::new(),
            ttl: Duration::milliseconds(millis.max(1)),
        }
    }

    /// Pushes a toast, stamping its expiry deadline from the current time.
    ///
    /// Returns the TTL in seconds so the caller can arm a matching timer.
    pub fn push(&mut self, message: impl Into<String>) -> f64 {
        let message = message.into();
        tracing::debug!(message = %message, "toast pushed");
        self.queue.push(Notification {
            message,
            expires_at: Utc::now() + self.ttl,
        });
        self.ttl.num_milliseconds() as f64 / 1000.0
    }

    /// Drops every toast whose deadline is at or before `now`.
    ///
    /// Returns the number of dismissed toasts; callers re-render only when
    /// this is non-zero.
    pub fn sweep(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.queue.len();
        self.queue.retain(|toast| toast.expires_at > now);
        let removed = before - self.queue.len();
        if removed > 0 {
            tracing::debug!(removed, remaining = self.queue.len(), "toasts expired");
        }
        removed
    }

    /// Live toast messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.queue.iter().map(|t| t.message.as_str()).collect()
    }

    /// Whether any toast is currently live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushed_toast_is_live_until_its_deadline() {
        let mut toasts = Notifications::new(3.0);
        toasts.push("New Todo added!");
        assert_eq!(toasts.messages(), vec!["New Todo added!"]);

        // Just before the deadline nothing expires.
        let removed = toasts.sweep(Utc::now() + Duration::seconds(2));
        assert_eq!(removed, 0);

        let removed = toasts.sweep(Utc::now() + Duration::seconds(4));
        assert_eq!(removed, 1);
        assert!(toasts.is_empty());
    }

    #[test]
    fn toasts_stack_in_push_order() {
        let mut toasts = Notifications::new(3.0);
        toasts.push("Todo updated");
        toasts.push("Todo has been deleted!");
        assert_eq!(
            toasts.messages(),
            vec!["Todo updated", "Todo has been deleted!"]
        );
    }

    #[test]
    fn push_reports_ttl_for_timer_scheduling() {
        let mut toasts = Notifications::new(2.5);
        let ttl = toasts.push("New Todo added!");
        assert!((ttl - 2.5).abs() < 1e-9);
    }

    #[test]
    fn sweep_only_drops_expired_toasts() {
        let mut toasts = Notifications::new(3.0);
        toasts.push("old");
        // Backdate the first toast so only it expires.
        toasts.queue[0].expires_at = Utc::now() - Duration::seconds(1);
        toasts.push("fresh");

        let removed = toasts.sweep(Utc::now());
        assert_eq!(removed, 1);
        assert_eq!(toasts.messages(), vec!["fresh"]);
    }
}
