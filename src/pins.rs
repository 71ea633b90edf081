//! GPIO pin assignments for the devkit build.
//!
//! Matches the common ESP32 devkit wiring: the BOOT button on GPIO0
//! (active-low with on-board pull-up) and the on-board LED on GPIO2.

/// Push-button input.
pub const BUTTON_GPIO: i32 = 0;

/// Status LED output.
pub const LED_GPIO: i32 = 2;
