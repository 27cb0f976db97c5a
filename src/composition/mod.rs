pub mod key;
pub mod pattern;
pub mod scheduler;
pub mod snapshot;
pub mod voice;
pub mod wander;

pub use key::KeyCenter;
pub use pattern::Pattern;
pub use scheduler::{hat_velocity, Composition, Toggles};
pub use snapshot::{CompositionSnapshot, VoiceSnapshot};
pub use voice::Voice;
pub use wander::WanderingParameter;
