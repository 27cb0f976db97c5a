//! Self-mutating melodic patterns.
//!
//! A pattern is a short cyclic sequence of scale degrees belonging to one
//! voice. It never stops playing and never settles: every few steps the
//! owning voice asks it to mutate, and it applies exactly one operator:
//! usually a gentle one, occasionally a reshape that changes its length.

use crate::error::Error;
use crate::random::{choose, rnd_int};

/// Lengths a reshape may pick. Odd lengths against the 4-step mutation
/// cadence keep the cycles phasing against each other.
pub const PATTERN_LENGTHS: [usize; 5] = [3, 4, 5, 8, 12];

/// Mutation operators ordered gentlest-first; `mutate` draws an index with
/// power 5, so swap dominates and reshape stays rare.
const MUTATION_BIAS: f64 = 5.0;

/// Octave lifts applied to a fresh note: stay put or jump one octave up.
const OCTAVE_LIFTS: [i32; 2] = [0, 12];
/// Lift choices for voices with octave variation disabled.
const NO_LIFT: [i32; 1] = [0];

/// A cyclically played, self-mutating sequence of scale degrees.
///
/// Invariants held across all mutations: the length is always one of
/// [`PATTERN_LENGTHS`], and every slot holds a value drawn from the scale
/// (plus an optional octave lift).
#[derive(Debug)]
pub struct Pattern {
    steps: Vec<i32>,
    scale: Vec<i32>,
    lifts: &'static [i32],
    rng: fastrand::Rng,
}

impl Pattern {
    /// Create a pattern over `scale` with octave variation enabled.
    ///
    /// The pattern starts with a random length, all slots filled. Rejects
    /// an empty scale.
    pub fn new(scale: Vec<i32>, rng: fastrand::Rng) -> Result<Self, Error> {
        Self::build(scale, &OCTAVE_LIFTS, rng)
    }

    /// Create a pattern that never lifts notes an octave.
    ///
    /// Used by the bass voice, whose single-degree scale plus a fixed lift
    /// gives a steady pedal tone.
    pub fn flat(scale: Vec<i32>, rng: fastrand::Rng) -> Result<Self, Error> {
        Self::build(scale, &NO_LIFT, rng)
    }

    fn build(scale: Vec<i32>, lifts: &'static [i32], rng: fastrand::Rng) -> Result<Self, Error> {
        if scale.is_empty() {
            return Err(Error::EmptyScale);
        }

        let mut pattern = Self {
            steps: Vec::new(),
            scale,
            lifts,
            rng,
        };
        pattern.reshape();
        Ok(pattern)
    }

    /// A fresh value: a uniform scale degree plus a uniform octave lift.
    fn random_note(&mut self) -> i32 {
        *choose(&mut self.rng, &self.scale, 1.0) + *choose(&mut self.rng, self.lifts, 1.0)
    }

    /// Pick a new length uniformly from [`PATTERN_LENGTHS`] and resize.
    pub fn reshape(&mut self) {
        let len = *choose(&mut self.rng, &PATTERN_LENGTHS, 1.0);
        self.resize(len);
    }

    /// Resize to exactly `len` steps: truncate when shrinking, append fresh
    /// notes when growing. Retained slots keep their values.
    pub fn resize(&mut self, len: usize) {
        if len <= self.steps.len() {
            self.steps.truncate(len);
        } else {
            while self.steps.len() < len {
                let note = self.random_note();
                self.steps.push(note);
            }
        }
    }

    /// Exchange two uniformly chosen slots (possibly the same one).
    pub fn swap(&mut self) {
        let a = rnd_int(&mut self.rng, self.steps.len(), 1.0);
        let b = rnd_int(&mut self.rng, self.steps.len(), 1.0);
        self.steps.swap(a, b);
    }

    /// Replace one uniformly chosen slot with a fresh note.
    pub fn randomize_one(&mut self) {
        let index = rnd_int(&mut self.rng, self.steps.len(), 1.0);
        self.steps[index] = self.random_note();
    }

    /// Apply exactly one mutation operator.
    ///
    /// Heavily biased toward swap, then randomize-one, with reshape as the
    /// rare large jump, so pattern evolution stays mostly subtle.
    pub fn mutate(&mut self) {
        match rnd_int(&mut self.rng, 3, MUTATION_BIAS) {
            0 => self.swap(),
            1 => self.randomize_one(),
            _ => self.reshape(),
        }
    }

    /// The value at `step`, indexed cyclically; the absolute step counter
    /// can grow forever.
    pub fn get(&self, step: u64) -> i32 {
        self.steps[(step % self.steps.len() as u64) as usize]
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The current sequence, for snapshots and display.
    pub fn steps(&self) -> &[i32] {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALE: [i32; 5] = [0, 2, 3, 7, 10];

    fn pentatonic(seed: u64) -> Pattern {
        Pattern::new(SCALE.to_vec(), fastrand::Rng::with_seed(seed)).unwrap()
    }

    fn assert_invariants(pattern: &Pattern) {
        assert!(
            PATTERN_LENGTHS.contains(&pattern.len()),
            "illegal length {}",
            pattern.len()
        );
        for &step in pattern.steps() {
            let degree = step % 12;
            assert!(
                SCALE.contains(&degree),
                "step {} is not a lifted scale degree",
                step
            );
            assert!((0..24).contains(&step), "step {} outside two octaves", step);
        }
    }

    #[test]
    fn test_rejects_empty_scale() {
        let result = Pattern::new(Vec::new(), fastrand::Rng::with_seed(1));
        assert!(matches!(result, Err(Error::EmptyScale)));
    }

    #[test]
    fn test_construction_fills_every_slot() {
        for seed in 0..32 {
            let pattern = pentatonic(seed);
            assert_invariants(&pattern);
        }
    }

    #[test]
    fn test_length_invariant_survives_mutation() {
        let mut pattern = pentatonic(42);
        for _ in 0..10_000 {
            pattern.mutate();
            assert_invariants(&pattern);
        }
    }

    #[test]
    fn test_get_is_periodic() {
        let pattern = pentatonic(42);
        let len = pattern.len() as u64;
        for step in 0..100 {
            assert_eq!(pattern.get(step), pattern.get(step + len));
            assert_eq!(pattern.get(step), pattern.get(step + 10 * len));
        }
    }

    #[test]
    fn test_swap_preserves_value_multiset() {
        let mut pattern = pentatonic(7);
        for _ in 0..1000 {
            let mut before = pattern.steps().to_vec();
            pattern.swap();
            let mut after = pattern.steps().to_vec();
            before.sort_unstable();
            after.sort_unstable();
            assert_eq!(before, after);
        }
    }

    #[test]
    fn test_randomize_one_changes_at_most_one_slot() {
        let mut pattern = pentatonic(7);
        for _ in 0..1000 {
            let before = pattern.steps().to_vec();
            pattern.randomize_one();
            let after = pattern.steps().to_vec();
            assert_eq!(before.len(), after.len());
            let changed = before
                .iter()
                .zip(after.iter())
                .filter(|(a, b)| a != b)
                .count();
            assert!(changed <= 1, "{} slots changed", changed);
        }
    }

    #[test]
    fn test_resize_growth_preserves_prefix() {
        let mut pattern = pentatonic(3);
        pattern.resize(3);
        let prefix = pattern.steps().to_vec();
        pattern.resize(12);
        assert_eq!(pattern.len(), 12);
        assert_eq!(&pattern.steps()[..3], &prefix[..]);
        assert_invariants(&pattern);
    }

    #[test]
    fn test_resize_shrink_truncates() {
        let mut pattern = pentatonic(3);
        pattern.resize(12);
        let prefix = pattern.steps()[..4].to_vec();
        pattern.resize(4);
        assert_eq!(pattern.steps(), &prefix[..]);
    }

    #[test]
    fn test_flat_single_degree_is_constant() {
        // A one-degree scale with octave lifts disabled can only ever
        // produce zeros, whatever the generator does.
        let mut pattern = Pattern::flat(vec![0], fastrand::Rng::with_seed(9)).unwrap();
        pattern.resize(5);
        assert_eq!(pattern.steps(), &[0, 0, 0, 0, 0]);
        assert_eq!(pattern.get(7), pattern.get(2));
        for _ in 0..100 {
            pattern.mutate();
            assert!(pattern.steps().iter().all(|&s| s == 0));
        }
    }

    #[test]
    fn test_octave_lift_occurs() {
        let mut pattern = pentatonic(11);
        let mut saw_lift = false;
        for _ in 0..2000 {
            pattern.randomize_one();
            if pattern.steps().iter().any(|&s| s >= 12) {
                saw_lift = true;
                break;
            }
        }
        assert!(saw_lift, "octave lift never chosen in 2000 fresh notes");
    }

    #[test]
    fn test_mutation_favors_swap_over_reshape() {
        // Track length changes as a proxy for reshape frequency: with bias
        // power 5, reshape lands well under 10% of mutations.
        let mut pattern = pentatonic(13);
        let mut reshapes = 0u32;
        let n = 10_000;
        for _ in 0..n {
            let before = pattern.len();
            pattern.mutate();
            if pattern.len() != before {
                reshapes += 1;
            }
        }
        // Length-preserving reshapes hide in this count, so it understates
        // reshape frequency; the bound still holds with margin.
        assert!(
            (reshapes as f64) < n as f64 * 0.1,
            "reshape too frequent: {}/{}",
            reshapes,
            n
        );
    }
}
