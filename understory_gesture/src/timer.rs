// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-slot deferred reset.
//!
//! The tracker decides *when* a reset is due; the host owns the clock and
//! arms a real timer for [`QuiescenceTimer::deadline`], then reports back
//! through the tracker's `on_timer`. Scheduling always replaces the pending
//! deadline, so there is never more than one.

/// Idle time after the last wheel event before its velocity drops to zero.
pub const QUIESCENCE_MS: f64 = 200.0;

/// At most one pending deadline, in host milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuiescenceTimer {
    delay_ms: f64,
    deadline: Option<f64>,
}

impl Default for QuiescenceTimer {
    fn default() -> Self {
        Self::new(QUIESCENCE_MS)
    }
}

impl QuiescenceTimer {
    /// Creates an idle timer with the given delay.
    #[must_use]
    pub const fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    /// Cancels any pending deadline and schedules a new one `delay` after `now_ms`.
    pub fn schedule(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.delay_ms);
    }

    /// Cancels the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// The pending deadline.
    #[must_use]
    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    /// Returns `true`, once, if the pending deadline is at or before `now_ms`.
    pub fn fire(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now_ms => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
