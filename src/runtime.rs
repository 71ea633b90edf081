//! Startup wiring — the only externally callable surface of the core.
//!
//! [`start`] configures both pins, seeds the monitor from the live
//! input level, registers the blink-rate reactor on the edge channel,
//! and launches the two long-running tasks:
//!
//! ```text
//! poll task ──▶ InputMonitor ──▶ EdgeChannel ──▶ BlinkRateReactor
//!                                                      │ increase()
//!                                                      ▼
//! blink task ◀── fresh read at every reschedule ── IntervalController
//! ```
//!
//! Any pin readiness or configuration failure aborts startup with a
//! typed error before either task exists. Once running, the tasks are
//! fire-and-forget: the poll task never terminates, and the blink task
//! exits permanently on its first toggle failure.

use core::time::Duration;
use std::sync::Arc;
use std::thread::JoinHandle;

use log::info;

use crate::blink::BlinkScheduler;
use crate::channel::EdgeChannel;
use crate::config::SystemConfig;
use crate::drivers::gpio::{ButtonInput, LedOutput};
use crate::drivers::hw_init;
use crate::drivers::task_pin::{self, Core};
use crate::interval::IntervalController;
use crate::monitor::InputMonitor;
use crate::pins;
use crate::poll;
use crate::ports::InputPort;
use crate::reactor::BlinkRateReactor;

const POLL_TASK_PRIORITY: u8 = 5;
const BLINK_TASK_PRIORITY: u8 = 5;
const TASK_STACK_KB: usize = 4;

/// Handles to the two running tasks.
pub struct App {
    poll: JoinHandle<()>,
    blink: JoinHandle<()>,
}

impl App {
    /// Park the caller on the running tasks. The poll task never
    /// returns, so in practice this blocks for the process lifetime.
    pub fn join(self) {
        let _ = self.blink.join();
        let _ = self.poll.join();
    }
}

/// Configure hardware and launch the control loop.
pub fn start(config: &SystemConfig) -> crate::Result<App> {
    hw_init::configure_pins()?;

    let mut button = ButtonInput::new(pins::BUTTON_GPIO);
    let led = LedOutput::new(pins::LED_GPIO);

    let interval = Arc::new(IntervalController::new(
        config.initial_interval_ms,
        config.interval_step_ms,
    ));

    let initial = button.read_level();
    info!("pin state init: {initial}");
    let monitor = InputMonitor::new(initial);

    let mut channel = EdgeChannel::new();
    channel.register(Box::new(BlinkRateReactor::new(Arc::clone(&interval))))?;

    let blink_interval = Arc::clone(&interval);
    let blink = task_pin::spawn_on_core(
        Core::App,
        BLINK_TASK_PRIORITY,
        TASK_STACK_KB,
        "blink\0",
        move || run_blink(led, &blink_interval),
    )?;

    let publish_timeout = Duration::from_millis(u64::from(config.publish_timeout_ms));
    let idle_delay = Duration::from_millis(u64::from(config.poll_idle_delay_ms));
    let poll = task_pin::spawn_on_core(
        Core::App,
        POLL_TASK_PRIORITY,
        TASK_STACK_KB,
        "poll\0",
        move || poll::run(monitor, button, channel, publish_timeout, idle_delay),
    )?;

    Ok(App { poll, blink })
}

/// Blink-timer task body: hold exactly one pending delay at a time,
/// sleep it, fire, and repeat until the scheduler stops.
fn run_blink(mut led: LedOutput, interval: &IntervalController) {
    let mut scheduler = BlinkScheduler::new();
    let Some(mut delay) = scheduler.start(interval) else {
        return;
    };
    loop {
        std::thread::sleep(Duration::from_millis(u64::from(delay)));
        match scheduler.fire(&mut led, interval) {
            Some(next) => delay = next,
            None => break,
        }
    }
    info!("blink: task exited");
}
