/*
Wandering Parameters
====================

A wandering parameter is a bounded second-order random walk: instead of
jittering a value directly, each tick nudges a *velocity* and the velocity
moves the value. Three forces act on the velocity:

  decay        velocity *= 0.95 each tick, so the walk never runs away
  correction   a fixed push back toward the range once the value strays
               past a bound (the bounds are soft, not clamps)
  drift        a fresh uniform impulse in [-drift, +drift) each tick,
               which keeps the walk alive indefinitely

The output is a smoothly varying, self-correcting control signal. The engine
uses one per timbral control: a filter exponent wandering in [5, 9] (mapped
through exp() to a cutoff sweep) and a delay feedback amount wandering in
[0.1, 0.9].
*/

use crate::error::Error;

/// Per-tick velocity decay. Below 1.0 so the walk is not explosive.
const DECAY: f64 = 0.95;

/// A bounded, velocity-damped random walk producing a drifting scalar.
///
/// The value starts at the midpoint of the bounds and may transiently
/// exceed them; the corrective force only accelerates it back, it never
/// clips.
#[derive(Debug)]
pub struct WanderingParameter {
    value: f64,
    direction: f64,
    lower: f64,
    upper: f64,
    drift: f64,
    correction: f64,
    rng: fastrand::Rng,
}

impl WanderingParameter {
    /// Create a parameter wandering between `lower` and `upper`.
    ///
    /// Rejects `lower >= upper`. The initial velocity is uniform in
    /// `[-10 * drift, 10 * drift)`, so a zero drift starts the walk at rest.
    pub fn new(lower: f64, upper: f64, drift: f64, correction: f64) -> Result<Self, Error> {
        Self::with_rng(lower, upper, drift, correction, fastrand::Rng::new())
    }

    /// As [`new`](Self::new), with an explicit generator for reproducible
    /// walks.
    pub fn with_rng(
        lower: f64,
        upper: f64,
        drift: f64,
        correction: f64,
        mut rng: fastrand::Rng,
    ) -> Result<Self, Error> {
        if lower >= upper {
            return Err(Error::InvalidBounds { lower, upper });
        }

        let direction = rng.f64() * 20.0 * drift - 10.0 * drift;

        Ok(Self {
            value: (lower + upper) / 2.0,
            direction,
            lower,
            upper,
            drift,
            correction,
            rng,
        })
    }

    /// Advance the walk one tick and return the updated value.
    pub fn move_and_get(&mut self) -> f64 {
        self.value += self.direction;
        self.direction *= DECAY;

        if self.value < self.lower {
            self.direction += self.correction;
        }
        if self.value > self.upper {
            self.direction -= self.correction;
        }

        self.direction += self.rng.f64() * 2.0 * self.drift - self.drift;

        self.value
    }

    /// Current value without advancing the walk.
    pub fn value(&self) -> f64 {
        self.value
    }
}
