//! Clock-driven bookkeeping for debounced input.
//!
//! Time is passed in as milliseconds by the caller, so the browser client can
//! feed `Date.now()` while tests feed a fake clock.

/// Holds the latest input until no new input has arrived for `quiet_ms`.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet_ms: f64,
    pending: Option<T>,
    deadline: f64,
}

impl<T> Debouncer<T> {
    pub fn new(quiet_ms: u32) -> Self {
        Self {
            quiet_ms: f64::from(quiet_ms),
            pending: None,
            deadline: 0.0,
        }
    }

    /// Record a new value, replacing any pending one and pushing the deadline out.
    /// Returns the new deadline.
    pub fn input(&mut self, value: T, now_ms: f64) -> f64 {
        self.pending = Some(value);
        self.deadline = now_ms + self.quiet_ms;
        self.deadline
    }

    /// Milliseconds left until the pending value settles, `None` when nothing is pending.
    pub fn remaining_ms(&self, now_ms: f64) -> Option<f64> {
        self.pending
            .as_ref()
            .map(|_| (self.deadline - now_ms).max(0.0))
    }

    /// Take the pending value once its quiet period has elapsed.
    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        if self.pending.is_some() && now_ms >= self.deadline {
            self.pending.take()
        } else {
            None
        }
    }

    /// Take the pending value immediately, ignoring the deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
