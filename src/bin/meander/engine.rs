//! Engine thread - the musical clock.
//!
//! Ticks the composition at the transport period against deadline-corrected
//! wall-clock time, so tempo does not drift with scheduling jitter. Control
//! messages from the UI are drained at the top of each tick, which is the
//! only point where the toggles may change.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rtrb::{Consumer, Producer};

use meander::clock::Transport;
use meander::device::{AudioDevice, NoteEvent, Visualiser};
use meander::{Composition, CompositionSnapshot};

use super::ui::state::{ControlMessage, EngineUpdate};

/// Audio collaborator for the terminal build: records each tick's device
/// calls so the UI can flash percussion and show voice pitches. No signal
/// is generated.
#[derive(Debug, Default)]
struct DeviceLog {
    kick_hit: bool,
    hat_hit: Option<f64>,
    frequencies: Vec<f64>,
}

impl DeviceLog {
    fn clear(&mut self) {
        self.kick_hit = false;
        self.hat_hit = None;
    }
}

impl AudioDevice for DeviceLog {
    fn note_on(&mut self, voice: usize, event: &NoteEvent) {
        if self.frequencies.len() <= voice {
            self.frequencies.resize(voice + 1, 0.0);
        }
        self.frequencies[voice] = event.frequency;
    }

    fn kick(&mut self) {
        self.kick_hit = true;
    }

    fn hat(&mut self, velocity: f64) {
        self.hat_hit = Some(velocity);
    }

    fn set_delay_feedback(&mut self, _voice: usize, _amount: f64) {}
}

/// Visual collaborator for the engine side: holds the tick's snapshot until
/// the loop packages it into an update.
#[derive(Debug, Default)]
struct SnapshotSlot {
    snapshot: Option<CompositionSnapshot>,
    decorated: bool,
}

impl SnapshotSlot {
    fn clear(&mut self) {
        self.snapshot = None;
        self.decorated = false;
    }
}

impl Visualiser for SnapshotSlot {
    fn visualise(&mut self, snapshot: &CompositionSnapshot) {
        self.snapshot = Some(snapshot.clone());
    }

    fn decorate(&mut self) {
        self.decorated = true;
    }
}

/// The engine thread body.
pub struct Engine {
    composition: Composition,
    transport: Transport,
    updates: Producer<EngineUpdate>,
    controls: Consumer<ControlMessage>,
    quit: Arc<AtomicBool>,
}

impl Engine {
    pub fn new(
        composition: Composition,
        transport: Transport,
        updates: Producer<EngineUpdate>,
        controls: Consumer<ControlMessage>,
        quit: Arc<AtomicBool>,
    ) -> Self {
        Self {
            composition,
            transport,
            updates,
            controls,
            quit,
        }
    }

    pub fn run(mut self) {
        let period = self.transport.tick_interval();
        let mut device = DeviceLog::default();
        let mut slot = SnapshotSlot::default();
        let mut deadline = Instant::now() + period;

        while !self.quit.load(Ordering::Relaxed) {
            while let Ok(message) = self.controls.pop() {
                match message {
                    ControlMessage::ToggleKick => {
                        self.composition.toggle_kick();
                    }
                    ControlMessage::ToggleHat => {
                        self.composition.toggle_hat();
                    }
                    ControlMessage::ToggleDecor => {
                        self.composition.toggle_decor();
                    }
                }
            }

            device.clear();
            slot.clear();
            self.composition.step(&mut device, &mut slot);

            if let Some(snapshot) = slot.snapshot.take() {
                // A full buffer means the UI has fallen behind; only the
                // latest state is displayed, so stale updates can drop.
                let _ = self.updates.push(EngineUpdate {
                    snapshot,
                    kick: device.kick_hit,
                    hat: device.hat_hit,
                    frequencies: device.frequencies.clone(),
                    decorated: slot.decorated,
                });
            }

            let now = Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            }
            deadline += period;
        }
    }
}
