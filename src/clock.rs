//! The two clocks of the piece.
//!
//! The musical clock ticks once per 16th note at a fixed tempo; the visual
//! clock refreshes at a fixed frame rate. They are independent: the
//! visualiser only ever reads the most recently published snapshot.

use std::time::Duration;

/// Composition steps per beat: the clock ticks in 16th notes.
const STEPS_PER_BEAT: f64 = 4.0;

/// Visual refresh rate in frames per second.
pub const FRAME_RATE: f64 = 30.0;

/// Fixed-tempo timing source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transport {
    bpm: f64,
}

impl Transport {
    pub fn new(bpm: f64) -> Self {
        Self { bpm }
    }

    pub fn bpm(&self) -> f64 {
        self.bpm
    }

    /// Wall-clock period of one composition step.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(60.0 / self.bpm / STEPS_PER_BEAT)
    }

    /// Wall-clock period of one visual frame.
    pub fn frame_interval() -> Duration {
        Duration::from_secs_f64(1.0 / FRAME_RATE)
    }
}
