//! A voice: one independent synthesis line.
//!
//! Each voice composes a pattern and two wandering parameters into a step
//! function. Per tick it emits one note-on to the audio device, retargets
//! its delay feedback, and every 4th step lets its pattern mutate.

use crate::composition::pattern::Pattern;
use crate::composition::snapshot::VoiceSnapshot;
use crate::composition::wander::WanderingParameter;
use crate::config::VoiceConfig;
use crate::device::{AudioDevice, NoteEvent, Waveform};
use crate::error::Error;

// The filter parameter wanders in log space; exp() maps it to Hz, turning a
// linear walk into a perceptually even cutoff sweep (~150 Hz to ~8 kHz).
const FILTER_BOUNDS: (f64, f64) = (5.0, 9.0);
const FILTER_DRIFT: f64 = 0.002;
const FILTER_CORRECTION: f64 = 0.03;

const FEEDBACK_BOUNDS: (f64, f64) = (0.1, 0.9);
const FEEDBACK_DRIFT: f64 = 0.0007;
const FEEDBACK_CORRECTION: f64 = 0.001;

/// Local steps between pattern mutations.
const MUTATION_INTERVAL: u64 = 4;

/// Absolute frequency for a scale degree under the given root, in equal
/// temperament: `base * 2^((degree + root) / 12)`.
#[inline]
pub fn degree_to_freq(degree: i32, root: i32, base_pitch: f64) -> f64 {
    base_pitch * 2.0_f64.powf((degree + root) as f64 / 12.0)
}

/// One synthesis line: a pattern, a filter walk, a feedback walk, and a
/// monotonically increasing local step counter.
#[derive(Debug)]
pub struct Voice {
    name: String,
    base_pitch: f64,
    waveform: Waveform,
    pan: f64,
    gain: f64,
    pattern: Pattern,
    filter: WanderingParameter,
    feedback: WanderingParameter,
    step_count: u64,
}

impl Voice {
    /// Build a voice from its configuration, forking component generators
    /// off `rng` so a seeded engine is fully reproducible.
    pub fn new(config: &VoiceConfig, rng: &mut fastrand::Rng) -> Result<Self, Error> {
        let pattern = if config.octave_lift {
            Pattern::new(config.scale.clone(), rng.fork())?
        } else {
            Pattern::flat(config.scale.clone(), rng.fork())?
        };

        let filter = WanderingParameter::with_rng(
            FILTER_BOUNDS.0,
            FILTER_BOUNDS.1,
            FILTER_DRIFT,
            FILTER_CORRECTION,
            rng.fork(),
        )?;
        let feedback = WanderingParameter::with_rng(
            FEEDBACK_BOUNDS.0,
            FEEDBACK_BOUNDS.1,
            FEEDBACK_DRIFT,
            FEEDBACK_CORRECTION,
            rng.fork(),
        )?;

        Ok(Self {
            name: config.name.clone(),
            base_pitch: config.base_pitch,
            waveform: config.waveform,
            pan: config.pan,
            gain: config.gain,
            pattern,
            filter,
            feedback,
            step_count: 0,
        })
    }

    /// Advance one tick: play the next pattern step under `root`, drift the
    /// timbral controls, and return a display snapshot.
    ///
    /// `index` identifies this voice to the audio device.
    pub fn step(&mut self, index: usize, root: i32, audio: &mut dyn AudioDevice) -> VoiceSnapshot {
        self.step_count += 1;

        let degree = self.pattern.get(self.step_count);
        let frequency = degree_to_freq(degree, root, self.base_pitch);
        let filter_log = self.filter.move_and_get();

        audio.note_on(
            index,
            &NoteEvent {
                frequency,
                filter_cutoff: filter_log.exp(),
                gain: self.gain,
                pan: self.pan,
                waveform: self.waveform,
            },
        );

        if self.step_count % MUTATION_INTERVAL == 0 {
            self.pattern.mutate();
        }

        let feedback = self.feedback.move_and_get();
        audio.set_delay_feedback(index, feedback);

        VoiceSnapshot {
            name: self.name.clone(),
            step: (self.step_count % self.pattern.len() as u64) as usize,
            filter_log: (filter_log * 100.0).round() / 100.0,
            feedback_pct: (feedback * 100.0).round() as u8,
            pattern: self.pattern.steps().to_vec(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::pattern::PATTERN_LENGTHS;
    use crate::config::Config;

    /// Audio device that records what it was asked to play.
    #[derive(Default)]
    struct Recorder {
        notes: Vec<(usize, NoteEvent)>,
        feedback: Vec<(usize, f64)>,
    }

    impl AudioDevice for Recorder {
        fn note_on(&mut self, voice: usize, event: &NoteEvent) {
            self.notes.push((voice, *event));
        }
        fn kick(&mut self) {}
        fn hat(&mut self, _velocity: f64) {}
        fn set_delay_feedback(&mut self, voice: usize, amount: f64) {
            self.feedback.push((voice, amount));
        }
    }

    fn melodic_voice(seed: u64) -> Voice {
        let config = Config::default();
        let mut rng = fastrand::Rng::with_seed(seed);
        Voice::new(&config.voices[0], &mut rng).unwrap()
    }

    #[test]
    fn test_degree_to_freq_octaves_and_semitones() {
        assert!((degree_to_freq(0, 0, 110.0) - 110.0).abs() < 1e-9);
        assert!((degree_to_freq(12, 0, 110.0) - 220.0).abs() < 1e-9);
        assert!((degree_to_freq(0, 12, 110.0) - 220.0).abs() < 1e-9);
        // One semitone is the equal-temperament ratio 2^(1/12).
        let semitone = degree_to_freq(1, 0, 110.0) / 110.0;
        assert!((semitone - 2.0_f64.powf(1.0 / 12.0)).abs() < 1e-12);
    }

    #[test]
    fn test_step_emits_one_note_and_one_feedback_update() {
        let mut voice = melodic_voice(42);
        let mut audio = Recorder::default();
        for _ in 0..16 {
            voice.step(0, 0, &mut audio);
        }
        assert_eq!(audio.notes.len(), 16);
        assert_eq!(audio.feedback.len(), 16);
    }

    #[test]
    fn test_note_frequency_tracks_the_root() {
        let mut a = melodic_voice(42);
        let mut b = melodic_voice(42);
        let mut audio_a = Recorder::default();
        let mut audio_b = Recorder::default();
        // Identical seeds, roots an octave apart: every frequency doubles.
        for _ in 0..8 {
            a.step(0, 0, &mut audio_a);
            b.step(0, 12, &mut audio_b);
        }
        for (note_a, note_b) in audio_a.notes.iter().zip(audio_b.notes.iter()) {
            assert!((note_b.1.frequency / note_a.1.frequency - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_filter_cutoff_stays_musical() {
        let mut voice = melodic_voice(7);
        let mut audio = Recorder::default();
        for _ in 0..5000 {
            voice.step(0, 0, &mut audio);
        }
        for (_, note) in &audio.notes {
            // exp(5)=148 Hz, exp(9)=8103 Hz; the walk may drift slightly
            // past its soft bounds.
            assert!(
                (100.0..12_000.0).contains(&note.filter_cutoff),
                "cutoff far outside its soft range: {}",
                note.filter_cutoff
            );
        }
    }

    #[test]
    fn test_pattern_mutates_every_fourth_step() {
        let mut voice = melodic_voice(42);
        let mut audio = Recorder::default();
        for tick in 1..=64u64 {
            let before = voice.pattern().steps().to_vec();
            voice.step(0, 0, &mut audio);
            let after = voice.pattern().steps().to_vec();
            if tick % 4 != 0 {
                assert_eq!(before, after, "pattern changed off-cadence at {}", tick);
            }
            assert!(PATTERN_LENGTHS.contains(&voice.pattern().len()));
        }
    }

    #[test]
    fn test_snapshot_reflects_pattern_and_position() {
        let mut voice = melodic_voice(42);
        let mut audio = Recorder::default();
        for _ in 0..32 {
            let snapshot = voice.step(0, 0, &mut audio);
            assert_eq!(snapshot.pattern.len(), voice.pattern().len());
            assert!(snapshot.step < snapshot.pattern.len());
            assert!(snapshot.feedback_pct <= 100);
            assert_eq!(snapshot.name, "left");
        }
    }

    #[test]
    fn test_seeded_voices_are_reproducible() {
        let mut a = melodic_voice(1234);
        let mut b = melodic_voice(1234);
        let mut audio_a = Recorder::default();
        let mut audio_b = Recorder::default();
        for _ in 0..256 {
            let snap_a = a.step(0, 3, &mut audio_a);
            let snap_b = b.step(0, 3, &mut audio_b);
            assert_eq!(snap_a, snap_b);
        }
        assert_eq!(audio_a.notes, audio_b.notes);
    }
}
