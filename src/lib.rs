pub mod clock;
pub mod composition; // Patterns, wandering parameters, voices, and the scheduler
pub mod config;
pub mod device; // Boundary traits for the audio and visual collaborators
pub mod error;
pub mod random;

pub use composition::{Composition, CompositionSnapshot, Toggles, VoiceSnapshot};
pub use config::Config;
pub use error::Error;
