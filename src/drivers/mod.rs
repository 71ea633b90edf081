//! Hardware drivers and platform glue.
//!
//! Everything that touches ESP-IDF lives here, cfg-gated behind
//! `target_os = "espidf"` with simulation fallbacks for host builds.

pub mod gpio;
pub mod hw_init;
pub mod task_pin;
