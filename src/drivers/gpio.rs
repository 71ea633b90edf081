//! GPIO port adapters.
//!
//! Bridge the raw pin access in [`hw_init`](super::hw_init) to the
//! domain port traits. These are the only types the control loop ever
//! holds; on host builds they read and write the simulation statics.

use crate::drivers::hw_init;
use crate::ports::{InputPort, OutputPort, ToggleError};

/// Button input adapter.
pub struct ButtonInput {
    pin: i32,
}

impl ButtonInput {
    pub fn new(pin: i32) -> Self {
        Self { pin }
    }
}

impl InputPort for ButtonInput {
    fn read_level(&mut self) -> i32 {
        hw_init::gpio_read(self.pin)
    }
}

/// Status LED output adapter.
pub struct LedOutput {
    pin: i32,
}

impl LedOutput {
    pub fn new(pin: i32) -> Self {
        Self { pin }
    }
}

impl OutputPort for LedOutput {
    fn toggle(&mut self) -> Result<(), ToggleError> {
        let rc = hw_init::gpio_toggle(self.pin);
        if rc >= 0 { Ok(()) } else { Err(ToggleError { code: rc }) }
    }
}
