//! Startup wiring smoke test on the simulation backend.
//!
//! Host-only: drives `runtime::start` end to end against the sim GPIO
//! statics. The poll task runs for the remainder of the test process;
//! a small idle delay keeps it from pegging a CPU core.

#![cfg(not(target_os = "espidf"))]

use core::sync::atomic::Ordering;
use core::time::Duration;

use edgeblink::config::SystemConfig;
use edgeblink::drivers::hw_init::sim;
use edgeblink::runtime;

#[test]
fn started_system_blinks_and_survives_input_edges() {
    sim::INPUT_LEVEL.store(0, Ordering::Release);
    let config = SystemConfig {
        initial_interval_ms: 5,
        interval_step_ms: 100,
        publish_timeout_ms: 1000,
        poll_idle_delay_ms: 1,
    };

    let before = sim::LED_TOGGLES.load(Ordering::Acquire);
    let _app = runtime::start(&config).expect("startup must succeed on sim hardware");

    std::thread::sleep(Duration::from_millis(100));
    sim::INPUT_LEVEL.store(1, Ordering::Release);
    std::thread::sleep(Duration::from_millis(100));

    let after = sim::LED_TOGGLES.load(Ordering::Acquire);
    assert!(
        after > before,
        "blink task should have toggled the LED at least once"
    );
}
