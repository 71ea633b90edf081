//! Edge broadcast channel.
//!
//! One named channel instance carrying the latest detected pin level to
//! a fixed set of listeners. Registration happens once at startup; the
//! listener table is a stack-capacity `heapless::Vec`, so there is no
//! dynamic add/remove at runtime.
//!
//! Delivery is synchronous on the publisher's context, iterating the
//! table in registration order — a given listener is always invoked,
//! never skipped, for a successful publish. A publish that cannot
//! complete within its timeout is dropped, not escalated; callers treat
//! the channel as fire-and-forget and this lossy contract is accepted
//! behavior, not a bug to fix.

use core::time::Duration;

use log::warn;

use crate::error::Error;
use crate::ports::EdgeListener;

/// Maximum number of listeners (fixed at startup).
pub const MAX_LISTENERS: usize = 4;

/// Broadcast channel for pin-level edge events.
pub struct EdgeChannel {
    listeners: heapless::Vec<Box<dyn EdgeListener + Send>, MAX_LISTENERS>,
}

impl EdgeChannel {
    pub fn new() -> Self {
        Self {
            listeners: heapless::Vec::new(),
        }
    }

    /// Register a listener. Call only during startup, before the channel
    /// is handed to the poll task.
    pub fn register(&mut self, listener: Box<dyn EdgeListener + Send>) -> crate::Result<()> {
        self.listeners
            .push(listener)
            .map_err(|_| Error::ListenerTableFull)
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver `level` to every registered listener, in registration
    /// order, on the calling context.
    ///
    /// `timeout` bounds the delivery window. With in-process synchronous
    /// delivery the bound cannot currently be exceeded, so this always
    /// returns `true`; a `false` return means the event was dropped and
    /// the publisher carries on regardless.
    pub fn publish(&mut self, level: i32, timeout: Duration) -> bool {
        if timeout.is_zero() {
            warn!("channel: zero delivery window, edge {level} dropped");
            return false;
        }
        for listener in &mut self.listeners {
            listener.on_edge(level);
        }
        true
    }
}

impl Default for EdgeChannel {
    fn default() -> Self {
        Self::new()
    }
}
