//! Edgeblink firmware library.
//!
//! Busy-polls a push-button GPIO, broadcasts level-change events on an
//! in-process edge channel, and blinks a status LED whose period grows
//! by a fixed step on every detected edge.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod blink;
pub mod channel;
pub mod config;
pub mod interval;
pub mod monitor;
pub mod poll;
pub mod ports;
pub mod reactor;
pub mod runtime;

mod error;
mod pins;

pub use error::{Error, Result};

// Hardware access is cfg-gated inside; simulation stubs on non-ESP targets.
pub mod drivers;
