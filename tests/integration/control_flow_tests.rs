//! End-to-end control-loop behavior against mock hardware.

use core::time::Duration;
use std::sync::Arc;

use edgeblink::blink::{BlinkScheduler, BlinkState};
use edgeblink::channel::EdgeChannel;
use edgeblink::interval::IntervalController;
use edgeblink::monitor::InputMonitor;
use edgeblink::poll::poll_once;
use edgeblink::reactor::BlinkRateReactor;

use crate::mock_hw::{RecordingListener, ScriptedButton, ScriptedLed};

const TIMEOUT: Duration = Duration::from_secs(1);

/// Reference scenario: initial pin 0, interval 100, readings
/// `0,0,1,1,0` — two edges, interval ends at 300, and the blink
/// scheduler's next delay reflects the grown interval.
#[test]
fn two_edges_slow_the_blink_to_300ms() {
    let interval = Arc::new(IntervalController::new(100, 100));
    let mut channel = EdgeChannel::new();
    channel
        .register(Box::new(BlinkRateReactor::new(Arc::clone(&interval))))
        .unwrap();

    let mut sched = BlinkScheduler::new();
    assert_eq!(sched.start(&interval), Some(100));

    let mut button = ScriptedButton::new(&[0, 0, 1, 1, 0]);
    let mut monitor = InputMonitor::new(0);

    let edges: Vec<bool> = (0..5)
        .map(|_| poll_once(&mut monitor, &mut button, &mut channel, TIMEOUT))
        .collect();
    assert_eq!(edges, vec![false, false, true, false, true]);

    assert_eq!(interval.get_ms(), 300);

    // Next fire toggles once and reschedules with the grown interval.
    let mut led = ScriptedLed::new(&[0]);
    assert_eq!(sched.fire(&mut led, &interval), Some(300));
    assert_eq!(led.toggles, 1);
}

/// Reactor invocations arrive in detection order; payload values match
/// the published levels exactly.
#[test]
fn reactor_observes_edges_in_detection_order() {
    let interval = Arc::new(IntervalController::new(100, 100));
    let (recorder, seen) = RecordingListener::new();
    let mut channel = EdgeChannel::new();
    // Recorder first, reactor second — both see every publish.
    channel.register(Box::new(recorder)).unwrap();
    channel
        .register(Box::new(BlinkRateReactor::new(Arc::clone(&interval))))
        .unwrap();

    // 0 → 1 → 0 → 1: three transitions.
    let mut button = ScriptedButton::new(&[1, 0, 1]);
    let mut monitor = InputMonitor::new(0);
    for _ in 0..3 {
        poll_once(&mut monitor, &mut button, &mut channel, TIMEOUT);
    }

    assert_eq!(*seen.lock().unwrap(), vec![1, 0, 1]);
    assert_eq!(interval.get_ms(), 400);
}

/// Drive the blink task's loop shape: sleep-delay, fire, repeat. With
/// toggle results `[0, 0, -1]` the third fire observes the failure and
/// the scheduler stops for good.
#[test]
fn blink_loop_stops_on_third_toggle_failure() {
    let interval = IntervalController::new(100, 100);
    let mut sched = BlinkScheduler::new();
    let mut led = ScriptedLed::new(&[0, 0, -1]);

    let mut pending = sched.start(&interval);
    let mut fired = 0;
    while pending.is_some() {
        // One pending delay at a time; firing consumes it.
        pending = sched.fire(&mut led, &interval);
        fired += 1;
    }

    assert_eq!(fired, 3);
    assert_eq!(led.toggles, 3);
    assert_eq!(sched.state(), BlinkState::Stopped);

    // Manual fire after stop: no toggle, state unchanged.
    assert_eq!(sched.fire(&mut led, &interval), None);
    assert_eq!(led.toggles, 3);
    assert_eq!(sched.state(), BlinkState::Stopped);
}

/// Edges detected while the blink scheduler is stopped still grow the
/// interval, but never revive the scheduler.
#[test]
fn interval_changes_never_revive_a_stopped_scheduler() {
    let interval = Arc::new(IntervalController::new(100, 100));
    let mut channel = EdgeChannel::new();
    channel
        .register(Box::new(BlinkRateReactor::new(Arc::clone(&interval))))
        .unwrap();

    let mut sched = BlinkScheduler::new();
    let mut led = ScriptedLed::new(&[-1]);
    sched.start(&interval);
    assert_eq!(sched.fire(&mut led, &interval), None);

    let mut button = ScriptedButton::new(&[1]);
    let mut monitor = InputMonitor::new(0);
    assert!(poll_once(&mut monitor, &mut button, &mut channel, TIMEOUT));
    assert_eq!(interval.get_ms(), 200);

    assert_eq!(sched.fire(&mut led, &interval), None);
    assert_eq!(led.toggles, 1);
}
