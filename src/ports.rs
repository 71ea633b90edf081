//! Port traits — the boundary between the control loop and the hardware.
//!
//! ```text
//!   GPIO adapter ──▶ Port trait ──▶ monitor / blink (domain)
//! ```
//!
//! Driven adapters (real GPIO on ESP-IDF, recording mocks in tests)
//! implement these traits, so the domain core never touches hardware
//! directly.

use core::fmt;

/// Read-side port: the poll loop calls this to sample the input pin.
pub trait InputPort {
    /// Current logic level of the configured input (0 or 1).
    fn read_level(&mut self) -> i32;
}

/// Write-side port: the blink scheduler calls this to flip the LED.
pub trait OutputPort {
    /// Toggle the output once.
    fn toggle(&mut self) -> core::result::Result<(), ToggleError>;
}

/// Listener registered on the edge channel. Invoked synchronously on
/// the publisher's context, so implementations must return quickly.
pub trait EdgeListener {
    /// Called once per delivered edge with the new pin level.
    fn on_edge(&mut self, level: i32);
}

/// A toggle that the platform rejected. Carries the raw platform return
/// code (negative, following the `>= 0` success convention of the GPIO
/// layer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleError {
    pub code: i32,
}

impl fmt::Display for ToggleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "output toggle failed (rc={})", self.code)
    }
}
