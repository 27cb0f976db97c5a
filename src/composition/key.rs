//! The global key center.
//!
//! All voices transpose their scale degrees by a shared root key. Every 128
//! global steps the scheduler advances the root by a cycle-of-fifths-biased
//! step, which keeps key changes rare and musically plausible: staying put
//! is most likely, then the fifth, the fourth, and so on outward.

use crate::random::choose;

/// Candidate root movements in semitones, ordered by harmonic closeness:
/// stay, up a fifth, up a fourth, down three fifths, up two fifths.
const KEY_DELTAS: [i32; 5] = [0, 7, 5, 10, 2];

/// Bias power for the delta draw; the front of [`KEY_DELTAS`] dominates.
const KEY_BIAS: f64 = 3.0;

/// Display names for each root, rooted at A: the voices' 110 Hz and 55 Hz
/// base pitches are A2 and A1, so root 0 sounds in A.
pub const KEY_NAMES: [&str; 12] = [
    "A", "Bb", "B", "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab",
];

/// The shared root key: an integer semitone offset in `[0, 12)`.
///
/// Single writer (the scheduler); voices read the root by value each tick.
#[derive(Debug)]
pub struct KeyCenter {
    root: i32,
    rng: fastrand::Rng,
}

impl KeyCenter {
    pub fn new(rng: fastrand::Rng) -> Self {
        Self { root: 0, rng }
    }

    /// Advance the root by one cycle-of-fifths-biased step and return it.
    pub fn advance(&mut self) -> i32 {
        let delta = *choose(&mut self.rng, &KEY_DELTAS, KEY_BIAS);
        self.root = (self.root + delta) % 12;
        self.root
    }

    /// Current root in semitones above A.
    pub fn root(&self) -> i32 {
        self.root
    }

    /// Display name of the current root.
    pub fn name(&self) -> &'static str {
        KEY_NAMES[self.root as usize]
    }
}
