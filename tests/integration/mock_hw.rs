//! Mock hardware for integration tests.
//!
//! Records every toggle and replays scripted pin readings so tests can
//! assert on the full control-loop history without real GPIO.

use std::sync::{Arc, Mutex};

use edgeblink::ports::{EdgeListener, InputPort, OutputPort, ToggleError};

/// Input pin that replays a fixed reading sequence, then holds the
/// last value.
pub struct ScriptedButton {
    readings: Vec<i32>,
    next: usize,
}

#[allow(dead_code)]
impl ScriptedButton {
    pub fn new(readings: &[i32]) -> Self {
        assert!(!readings.is_empty());
        Self {
            readings: readings.to_vec(),
            next: 0,
        }
    }

    pub fn reads(&self) -> usize {
        self.next
    }
}

impl InputPort for ScriptedButton {
    fn read_level(&mut self) -> i32 {
        let i = self.next.min(self.readings.len() - 1);
        self.next += 1;
        self.readings[i]
    }
}

/// LED that replays scripted toggle return codes (`>= 0` success,
/// `< 0` failure) and counts attempts. Holds the last code once the
/// script is exhausted.
pub struct ScriptedLed {
    results: Vec<i32>,
    pub toggles: usize,
}

impl ScriptedLed {
    pub fn new(results: &[i32]) -> Self {
        assert!(!results.is_empty());
        Self {
            results: results.to_vec(),
            toggles: 0,
        }
    }
}

impl OutputPort for ScriptedLed {
    fn toggle(&mut self) -> Result<(), ToggleError> {
        let i = self.toggles.min(self.results.len() - 1);
        self.toggles += 1;
        let rc = self.results[i];
        if rc >= 0 { Ok(()) } else { Err(ToggleError { code: rc }) }
    }
}

/// Listener that records every delivered level.
pub struct RecordingListener {
    seen: Arc<Mutex<Vec<i32>>>,
}

impl RecordingListener {
    pub fn new() -> (Self, Arc<Mutex<Vec<i32>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                seen: Arc::clone(&seen),
            },
            seen,
        )
    }
}

impl EdgeListener for RecordingListener {
    fn on_edge(&mut self, level: i32) {
        self.seen.lock().unwrap().push(level);
    }
}
