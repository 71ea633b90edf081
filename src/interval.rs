//! Shared blink-interval state.
//!
//! Written by the edge-delivery context (the poll task) and read by the
//! blink-timer context at every reschedule, so the value lives in an
//! `AtomicU32` — no torn reads, no lock on the delivery path. The
//! interval only ever grows; there is no reset mechanism.

use core::sync::atomic::{AtomicU32, Ordering};

/// Blink interval in milliseconds, monotonically non-decreasing.
pub struct IntervalController {
    interval_ms: AtomicU32,
    step_ms: u32,
}

impl IntervalController {
    pub fn new(initial_ms: u32, step_ms: u32) -> Self {
        Self {
            interval_ms: AtomicU32::new(initial_ms),
            step_ms,
        }
    }

    /// Current interval in milliseconds.
    pub fn get_ms(&self) -> u32 {
        self.interval_ms.load(Ordering::Acquire)
    }

    /// Grow the interval by the fixed step. No upper bound.
    pub fn increase(&self) {
        self.interval_ms.fetch_add(self.step_ms, Ordering::AcqRel);
    }
}
