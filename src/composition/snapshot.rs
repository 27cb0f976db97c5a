//! Status snapshots published once per tick.
//!
//! Consumed only by the visual collaborator; the engine never reads them
//! back. Values are pre-rounded to what a display actually shows.

use super::scheduler::Toggles;

/// One voice's status after a step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoiceSnapshot {
    pub name: String,
    /// Cyclic position within the pattern
    pub step: usize,
    /// Filter exponent (log-scale cutoff), rounded to 2 decimals
    pub filter_log: f64,
    /// Delay feedback as a rounded percentage
    pub feedback_pct: u8,
    /// The full current pattern sequence
    pub pattern: Vec<i32>,
}

/// The whole piece's status after a tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompositionSnapshot {
    /// Global step counter
    pub step: u64,
    /// Display name of the current key center
    pub key: String,
    pub toggles: Toggles,
    /// Voice snapshots in scheduling order: left, right, bass
    pub voices: Vec<VoiceSnapshot>,
}
