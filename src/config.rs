//! Configuration for the piece.
//!
//! The defaults reproduce the piece as composed: 111 BPM, minor-pentatonic
//! melody voices panned apart an octave above the bass pedal. The struct
//! exists so the shared constants are explicit rather than scattered; the
//! engine is not intended to be retuned at runtime.

use crate::device::Waveform;

/// The melodic scale: minor pentatonic, as semitone offsets above the root.
pub const MINOR_PENTATONIC: [i32; 5] = [0, 2, 3, 7, 10];

/// Setup for one synthesis line.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoiceConfig {
    pub name: String,
    /// Reference pitch in Hz for scale degree 0 at root 0
    pub base_pitch: f64,
    pub waveform: Waveform,
    /// Stereo position (-1.0 left to +1.0 right)
    pub pan: f64,
    /// Fixed note gain
    pub gain: f64,
    /// Scale degrees this voice's pattern draws from (non-empty)
    pub scale: Vec<i32>,
    /// Whether fresh notes may jump an octave up
    pub octave_lift: bool,
}

/// Engine configuration. `Default` is the piece itself.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Tempo in beats per minute; the clock ticks in 16th notes
    pub bpm: f64,
    /// Voices in scheduling order: left, right, bass
    pub voices: Vec<VoiceConfig>,
    /// Global steps between key-change opportunities
    pub key_change_interval: u64,
    /// Seed for reproducible runs; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bpm: 111.0,
            voices: vec![
                VoiceConfig {
                    name: "left".into(),
                    base_pitch: 110.0,
                    waveform: Waveform::Sine,
                    pan: -0.6,
                    gain: 0.15,
                    scale: MINOR_PENTATONIC.to_vec(),
                    octave_lift: true,
                },
                VoiceConfig {
                    name: "right".into(),
                    base_pitch: 110.0,
                    waveform: Waveform::Triangle,
                    pan: 0.6,
                    gain: 0.15,
                    scale: MINOR_PENTATONIC.to_vec(),
                    octave_lift: true,
                },
                VoiceConfig {
                    name: "bass".into(),
                    base_pitch: 55.0,
                    waveform: Waveform::Sawtooth,
                    pan: 0.0,
                    gain: 0.15,
                    scale: vec![0],
                    octave_lift: false,
                },
            ],
            key_change_interval: 128,
            seed: None,
        }
    }
}

impl Config {
    /// The default piece with a fixed seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
