//! One-shot GPIO configuration and raw pin access.
//!
//! Configures the button input and LED output using raw ESP-IDF sys
//! calls. Called once from startup, before either task runs; the core
//! assumes pins are configured and ready from then on. Return codes
//! follow the `>= 0` success convention: `0` on success, negative on
//! failure.

use log::info;

#[cfg(target_os = "espidf")]
use crate::error::Error;
use crate::pins;

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

// ── Pin configuration ─────────────────────────────────────────

/// Check readiness of and configure both pins. Any failure aborts
/// startup; nothing is retried.
#[cfg(target_os = "espidf")]
pub fn configure_pins() -> crate::Result<()> {
    if !pin_ready(pins::BUTTON_GPIO) {
        return Err(Error::PinNotReady("button"));
    }
    if !pin_ready(pins::LED_GPIO) {
        return Err(Error::PinNotReady("led"));
    }

    let button_cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::BUTTON_GPIO,
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_ENABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    // SAFETY: gpio_config is called once from the single-threaded
    // startup path, before the poll and blink tasks exist.
    let rc = unsafe { gpio_config(&button_cfg) };
    if rc != ESP_OK as i32 {
        return Err(Error::PinConfig {
            pin: pins::BUTTON_GPIO,
            code: rc,
        });
    }

    let led_cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::LED_GPIO,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    // SAFETY: as above; single-threaded startup.
    let rc = unsafe { gpio_config(&led_cfg) };
    if rc != ESP_OK as i32 {
        return Err(Error::PinConfig {
            pin: pins::LED_GPIO,
            code: rc,
        });
    }
    // SAFETY: pin was just configured as output.
    unsafe { gpio_set_level(pins::LED_GPIO, 0) };

    info!(
        "hw_init: button GPIO{} (in, pull-up), led GPIO{} (out)",
        pins::BUTTON_GPIO,
        pins::LED_GPIO
    );
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn configure_pins() -> crate::Result<()> {
    info!(
        "hw_init(sim): button GPIO{}, led GPIO{}",
        pins::BUTTON_GPIO,
        pins::LED_GPIO
    );
    Ok(())
}

#[cfg(target_os = "espidf")]
fn pin_ready(pin: i32) -> bool {
    pin >= 0 && pin < gpio_num_t_GPIO_NUM_MAX
}

// ── Raw pin access ────────────────────────────────────────────

/// Current logic level of an already-configured input pin (0 or 1).
#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> i32 {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin.
    unsafe { gpio_get_level(pin) }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(_pin: i32) -> i32 {
    sim::INPUT_LEVEL.load(core::sync::atomic::Ordering::Acquire)
}

/// Toggle an already-configured output pin. Returns `0` on success,
/// negative on failure.
#[cfg(target_os = "espidf")]
pub fn gpio_toggle(pin: i32) -> i32 {
    use core::sync::atomic::{AtomicBool, Ordering};

    // Output data registers are not readable on plain GPIO outputs, so
    // the last driven level is tracked here. Only the blink task writes.
    static LED_LEVEL: AtomicBool = AtomicBool::new(false);

    let high = !LED_LEVEL.fetch_xor(true, Ordering::AcqRel);
    // SAFETY: gpio_set_level writes to an already-configured output pin.
    let rc = unsafe { gpio_set_level(pin, u32::from(high)) };
    if rc == ESP_OK as i32 { 0 } else { -1 }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_toggle(_pin: i32) -> i32 {
    sim::LED_TOGGLES.fetch_add(1, core::sync::atomic::Ordering::AcqRel);
    0
}

// ── Simulation backing state (host builds) ────────────────────

#[cfg(not(target_os = "espidf"))]
pub mod sim {
    use core::sync::atomic::{AtomicI32, AtomicU32};

    /// Level returned by [`super::gpio_read`] on host builds.
    pub static INPUT_LEVEL: AtomicI32 = AtomicI32::new(0);

    /// Count of [`super::gpio_toggle`] calls on host builds.
    pub static LED_TOGGLES: AtomicU32 = AtomicU32::new(0);
}
