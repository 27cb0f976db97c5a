//! The composition scheduler: the global clock body.
//!
//! One call to [`Composition::step`] is one 16th note. The scheduler gates
//! the percussion, advances the key center on its 128-step cadence, drives
//! the voices in a fixed order, and hands the resulting snapshot to the
//! visual collaborator. It is the single writer of all shared state; voices
//! receive the root key by value and own everything else they touch.

use crate::composition::key::KeyCenter;
use crate::composition::snapshot::{CompositionSnapshot, VoiceSnapshot};
use crate::composition::voice::Voice;
use crate::config::Config;
use crate::device::{AudioDevice, Visualiser};
use crate::error::Error;

/// Global steps between kick triggers while the kick is enabled.
const KICK_INTERVAL: u64 = 4;

/// External input toggles, flipped from outside the tick loop and read at
/// tick boundaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Toggles {
    pub kick: bool,
    pub hat: bool,
    /// Alternate visual mode: decorative extras on the visualiser
    pub decor: bool,
}

/// Hat velocity at `step`: one random term plus three periodic terms with
/// periods 2, 3 and 4, each normalized to [0, 1]. The coprime periods make
/// the accent pattern repeat only every 12 steps, and the random term keeps
/// even that from sounding mechanical.
pub fn hat_velocity(step: u64, random: f64) -> f64 {
    0.4 * random
        + 0.2 * (step % 2) as f64
        + 0.2 * (step % 3) as f64 / 2.0
        + 0.2 * (step % 4) as f64 / 3.0
}

/// The full piece: three voices, the shared key center, and the toggles,
/// advanced in lockstep by a fixed-tempo tick.
#[derive(Debug)]
pub struct Composition {
    voices: Vec<Voice>,
    key: KeyCenter,
    toggles: Toggles,
    step_count: u64,
    key_change_interval: u64,
    rng: fastrand::Rng,
}

impl Composition {
    /// Build the piece from a configuration.
    ///
    /// All component generators fork off one master generator, so a
    /// `config.seed` makes the entire composition reproducible.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let mut rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };

        let voices = config
            .voices
            .iter()
            .map(|voice| Voice::new(voice, &mut rng))
            .collect::<Result<Vec<_>, _>>()?;

        let key = KeyCenter::new(rng.fork());

        Ok(Self {
            voices,
            key,
            toggles: Toggles::default(),
            step_count: 0,
            key_change_interval: config.key_change_interval,
            rng,
        })
    }

    /// Advance the whole piece by one 16th note.
    pub fn step(&mut self, audio: &mut dyn AudioDevice, visual: &mut dyn Visualiser) {
        self.step_count += 1;

        if self.toggles.kick && self.step_count % KICK_INTERVAL == 0 {
            audio.kick();
        }
        if self.toggles.hat {
            let random = self.rng.f64();
            audio.hat(hat_velocity(self.step_count, random));
        }

        if self.step_count % self.key_change_interval == 0 {
            self.key.advance();
        }

        let root = self.key.root();
        let voices: Vec<VoiceSnapshot> = self
            .voices
            .iter_mut()
            .enumerate()
            .map(|(index, voice)| voice.step(index, root, audio))
            .collect();

        let snapshot = CompositionSnapshot {
            step: self.step_count,
            key: self.key.name().to_string(),
            toggles: self.toggles,
            voices,
        };
        visual.visualise(&snapshot);

        if self.toggles.decor {
            visual.decorate();
        }
    }

    pub fn toggle_kick(&mut self) -> bool {
        self.toggles.kick = !self.toggles.kick;
        self.toggles.kick
    }

    pub fn toggle_hat(&mut self) -> bool {
        self.toggles.hat = !self.toggles.hat;
        self.toggles.hat
    }

    pub fn toggle_decor(&mut self) -> bool {
        self.toggles.decor = !self.toggles.decor;
        self.toggles.decor
    }

    pub fn toggles(&self) -> Toggles {
        self.toggles
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn key_root(&self) -> i32 {
        self.key.root()
    }

    pub fn key_name(&self) -> &'static str {
        self.key.name()
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }
}
