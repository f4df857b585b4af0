// SPDX-License-Identifier: MPL-2.0
//! Single-slot restartable countdown.
//!
//! A `Countdown` owns at most one pending deadline. Arming it again replaces
//! the previous deadline, so there is never more than one live timer of a
//! given kind. Time is always passed in by the caller, which keeps the
//! navigator deterministic under test.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    started_at: Option<Instant>,
    deadline: Option<Instant>,
}

impl Countdown {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any pending deadline and starts a new one `duration` after `now`.
    pub fn arm(&mut self, now: Instant, duration: Duration) {
        self.started_at = Some(now);
        self.deadline = Some(now + duration);
    }

    /// Drops the pending deadline without firing it.
    pub fn cancel(&mut self) {
        self.started_at = None;
        self.deadline = None;
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fires the countdown if its deadline has passed.
    ///
    /// Returns `true` exactly once per armed deadline, on the first poll at or
    /// after the deadline. The slot is empty afterwards.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.cancel();
                true
            }
            _ => false,
        }
    }

    /// Fraction of the window already elapsed, in `0.0..=1.0`.
    ///
    /// `None` when nothing is pending.
    #[must_use]
    pub fn progress(&self, now: Instant) -> Option<f32> {
        let (started, deadline) = (self.started_at?, self.deadline?);
        let total = deadline.saturating_duration_since(started).as_secs_f32();
        if total <= f32::EPSILON {
            return Some(1.0);
        }
        let elapsed = now.saturating_duration_since(started).as_secs_f32();
        Some((elapsed / total).clamp(0.0, 1.0))
    }

    /// Time left before the deadline, `None` when nothing is pending.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
