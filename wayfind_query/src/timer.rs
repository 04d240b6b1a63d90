// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A cancellable single-shot timer driven by host timestamps.

/// Single-shot deadline, armed and polled with host timestamps in milliseconds.
///
/// The timer never reads a clock. Hosts pass the current time into
/// [`arm`](Self::arm) and [`poll`](Self::poll), typically from their event loop.
/// Arming always replaces any pending deadline, so at most one is live.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClearTimer {
    deadline: Option<u64>,
}

impl ClearTimer {
    /// Creates a disarmed timer.
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arms the timer to fire `delay` milliseconds after `now`.
    pub fn arm(&mut self, now: u64, delay: u64) {
        let deadline = now.saturating_add(delay);
        if let Some(previous) = self.deadline.replace(deadline) {
            log::trace!("clear timer re-armed: {previous} -> {deadline}");
        } else {
            log::trace!("clear timer armed for {deadline}");
        }
    }

    /// Cancels a pending deadline. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        let pending = self.deadline.take();
        if let Some(deadline) = pending {
            log::trace!("clear timer for {deadline} cancelled");
        }
        pending.is_some()
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Pending deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Fires the timer if `now` has reached the deadline.
    ///
    /// Returns `true` exactly once per armed deadline.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ClearTimer;

    #[test]
    fn fires_once_after_deadline() {
        let mut timer = ClearTimer::new();
        timer.arm(1_000, 500);
        assert!(!timer.poll(1_499));
        assert!(timer.poll(1_500));
        assert!(!timer.poll(2_000));
        assert!(!timer.is_armed());
    }

    #[test]
    fn re_arming_replaces_the_deadline() {
        let mut timer = ClearTimer::new();
        timer.arm(0, 500);
        timer.arm(400, 500);
        assert!(!timer.poll(600));
        assert_eq!(timer.deadline(), Some(900));
        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert!(!timer.poll(10_000));
    }
}
