//! Input polling task.
//!
//! The sole driver of the [`InputMonitor`]: samples the button as fast
//! as the CPU allows and publishes every detected edge on the edge
//! channel. The loop deliberately does not sleep between iterations —
//! responsiveness is favored over CPU/power efficiency, and adding an
//! idle delay is an explicit config deviation
//! ([`SystemConfig::poll_idle_delay_ms`]), never the default.
//!
//! [`SystemConfig::poll_idle_delay_ms`]: crate::config::SystemConfig::poll_idle_delay_ms

use core::time::Duration;

use log::{info, warn};

use crate::channel::EdgeChannel;
use crate::monitor::InputMonitor;
use crate::ports::InputPort;

/// One poll iteration: check for an edge and publish it.
///
/// Returns `true` when an edge was detected (whether or not the publish
/// succeeded — a dropped publish is accepted lossy behavior).
pub fn poll_once(
    monitor: &mut InputMonitor,
    input: &mut dyn InputPort,
    channel: &mut EdgeChannel,
    publish_timeout: Duration,
) -> bool {
    if !monitor.check_for_change(input) {
        return false;
    }
    let level = monitor.level();
    if !channel.publish(level, publish_timeout) {
        warn!("poll: edge (level={level}) dropped by channel");
    }
    info!("poll: new pin state {level}");
    true
}

/// Poll forever. Runs on its own task for the process lifetime.
pub fn run(
    mut monitor: InputMonitor,
    mut input: impl InputPort,
    mut channel: EdgeChannel,
    publish_timeout: Duration,
    idle_delay: Duration,
) -> ! {
    loop {
        poll_once(&mut monitor, &mut input, &mut channel, publish_timeout);
        if !idle_delay.is_zero() {
            std::thread::sleep(idle_delay);
        }
    }
}
