//! Input pin monitor — edge detection by compare-against-last-reading.
//!
//! Owns the last-known pin level; nothing else reads it directly. Other
//! components observe level changes only through the edge channel. There
//! is deliberately no debouncing: a single noisy transition counts as a
//! real edge.

use crate::ports::InputPort;

/// Tracks the last observed level of the input pin.
pub struct InputMonitor {
    pin_state: i32,
}

impl InputMonitor {
    /// Seed the monitor with the pin's current level. Call once, before
    /// polling begins.
    pub fn new(initial: i32) -> Self {
        Self { pin_state: initial }
    }

    /// Last stored reading. No side effects.
    pub fn level(&self) -> i32 {
        self.pin_state
    }

    /// Sample the live pin and compare against the stored level.
    ///
    /// On a difference, stores the new reading and returns `true`;
    /// otherwise returns `false`.
    pub fn check_for_change(&mut self, input: &mut dyn InputPort) -> bool {
        let reading = input.read_level();
        if reading != self.pin_state {
            self.pin_state = reading;
            return true;
        }
        false
    }
}
