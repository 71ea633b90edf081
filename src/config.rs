//! System configuration parameters
//!
//! All tunable parameters for the edgeblink control loop. Values are
//! compiled-in defaults; a provisioning layer may override them later.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Blink ---
    /// Initial LED blink interval (milliseconds)
    pub initial_interval_ms: u32,
    /// Amount added to the blink interval on every detected edge (milliseconds)
    pub interval_step_ms: u32,

    // --- Polling ---
    /// Upper bound on edge-channel delivery time (milliseconds)
    pub publish_timeout_ms: u32,
    /// Delay between poll iterations (milliseconds).
    ///
    /// The reference behavior is a pure busy loop (0). Any non-zero value
    /// trades input responsiveness for CPU/power and is an explicit,
    /// opt-in deviation from that behavior.
    pub poll_idle_delay_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            initial_interval_ms: 100,
            interval_step_ms: 100,
            publish_timeout_ms: 1000,
            poll_idle_delay_ms: 0,
        }
    }
}
