//! Shared state types for UI communication.

use meander::CompositionSnapshot;

/// Commands sent from the UI thread to the engine thread, applied at the
/// next tick boundary.
#[derive(Clone, Copy, Debug)]
pub enum ControlMessage {
    ToggleKick,
    ToggleHat,
    ToggleDecor,
}

/// One tick's worth of display state, published by the engine thread.
#[derive(Clone, Debug)]
pub struct EngineUpdate {
    pub snapshot: CompositionSnapshot,
    /// Whether the kick fired this tick
    pub kick: bool,
    /// Hat velocity, if the hat fired this tick
    pub hat: Option<f64>,
    /// Current oscillator frequency per voice, in scheduling order
    pub frequencies: Vec<f64>,
    /// Whether the decorative visual extra was triggered
    pub decorated: bool,
}
