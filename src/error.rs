//! Unified error types for the edgeblink firmware.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! startup path's error handling uniform. All variants are `Copy` so they
//! can be cheaply passed around without allocation.

use core::fmt;

/// Every fallible operation in the firmware funnels into this type.
///
/// Note the blink task's toggle failure is deliberately absent: a failed
/// toggle stops that task permanently but is never surfaced as a
/// process-level error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A pin failed its readiness check at startup.
    PinNotReady(&'static str),
    /// Configuring a pin's direction failed; carries the platform
    /// return code.
    PinConfig { pin: i32, code: i32 },
    /// The edge channel's fixed listener table is full.
    ListenerTableFull,
    /// Spawning a long-running task failed.
    TaskSpawn(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PinNotReady(name) => write!(f, "{name} pin is not ready"),
            Self::PinConfig { pin, code } => {
                write!(f, "failed to configure GPIO{pin} (rc={code})")
            }
            Self::ListenerTableFull => write!(f, "edge channel listener table full"),
            Self::TaskSpawn(name) => write!(f, "failed to spawn {name} task"),
        }
    }
}

impl std::error::Error for Error {}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
