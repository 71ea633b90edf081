//! Edge reactor — slows the blink on every detected edge.
//!
//! Registered once on the edge channel at startup. Runs on the channel's
//! delivery path (the poll task's context), so it does nothing beyond a
//! log line and one atomic add.

use std::sync::Arc;

use log::info;

use crate::interval::IntervalController;
use crate::ports::EdgeListener;

/// Listener that bumps the shared blink interval on each edge. The
/// payload level is only logged; the reaction is unconditional.
pub struct BlinkRateReactor {
    interval: Arc<IntervalController>,
}

impl BlinkRateReactor {
    pub fn new(interval: Arc<IntervalController>) -> Self {
        Self { interval }
    }
}

impl EdgeListener for BlinkRateReactor {
    fn on_edge(&mut self, level: i32) {
        self.interval.increase();
        info!(
            "react: edge (level={}), blink interval now {}ms",
            level,
            self.interval.get_ms()
        );
    }
}
