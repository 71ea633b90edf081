//! Blink scheduler state machine.
//!
//! `Idle → Scheduled → Stopped`, with `Stopped` terminal. The scheduler
//! itself is pure: it never sleeps and never owns a timer. Each call to
//! [`BlinkScheduler::fire`] attempts one LED toggle and, on success,
//! returns the delay for the next fire — read fresh from the shared
//! [`IntervalController`] so a reactor's increase takes effect on the
//! very next cycle without restarting anything. The driving timer task
//! holds at most one returned delay at a time, which is what keeps a
//! single pending toggle outstanding.
//!
//! A failed toggle is terminal: the pending cycle is abandoned, no retry
//! is attempted, and every later `fire` is a no-op.

use log::{info, warn};

use crate::interval::IntervalController;
use crate::ports::OutputPort;

/// Scheduler lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkState {
    /// Not yet started.
    Idle,
    /// Exactly one toggle pending.
    Scheduled,
    /// Toggle failed; no further toggles for the process lifetime.
    Stopped,
}

pub struct BlinkScheduler {
    state: BlinkState,
}

impl BlinkScheduler {
    pub fn new() -> Self {
        Self {
            state: BlinkState::Idle,
        }
    }

    pub fn state(&self) -> BlinkState {
        self.state
    }

    /// Schedule the first toggle. Returns the initial delay in
    /// milliseconds, or `None` if the scheduler already left `Idle`.
    pub fn start(&mut self, interval: &IntervalController) -> Option<u32> {
        match self.state {
            BlinkState::Idle => {
                self.state = BlinkState::Scheduled;
                let delay = interval.get_ms();
                info!("blink: started, first toggle in {delay}ms");
                Some(delay)
            }
            _ => None,
        }
    }

    /// One pending toggle fires.
    ///
    /// Returns the delay until the next fire, or `None` when the
    /// scheduler is not `Scheduled` or the toggle failed (terminal).
    pub fn fire(&mut self, led: &mut dyn OutputPort, interval: &IntervalController) -> Option<u32> {
        if self.state != BlinkState::Scheduled {
            return None;
        }
        match led.toggle() {
            Ok(()) => Some(interval.get_ms()),
            Err(e) => {
                warn!("blink: {e}, stopping permanently");
                self.state = BlinkState::Stopped;
                None
            }
        }
    }
}

impl Default for BlinkScheduler {
    fn default() -> Self {
        Self::new()
    }
}
