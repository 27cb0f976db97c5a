//! App - thread wiring and lifecycle.
//!
//! Two threads, two clocks: the engine thread ticks the composition at the
//! transport period and publishes one update per tick; the UI thread
//! refreshes at the frame rate and only ever reads the latest published
//! state. Ring buffers carry updates one way and toggle messages the other,
//! so neither thread blocks on the other.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use color_eyre::eyre::Result as EyreResult;

use meander::clock::Transport;
use meander::{Composition, Config};

use super::engine::Engine;
use super::ui::state::{ControlMessage, EngineUpdate};
use super::ui::UiApp;

/// Capacity of the engine-to-UI update channel. The UI drains every frame
/// and frames outnumber ticks, so a short buffer is plenty.
const UPDATE_CAPACITY: usize = 64;
/// Capacity of the UI-to-engine control channel.
const CONTROL_CAPACITY: usize = 16;

/// Main application: builds the composition and runs both threads.
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run until the user quits.
    pub fn run(self) -> EyreResult<()> {
        let composition = Composition::new(&self.config)?;
        let transport = Transport::new(self.config.bpm);

        let (update_tx, update_rx) = rtrb::RingBuffer::<EngineUpdate>::new(UPDATE_CAPACITY);
        let (control_tx, control_rx) = rtrb::RingBuffer::<ControlMessage>::new(CONTROL_CAPACITY);

        let quit = Arc::new(AtomicBool::new(false));
        let engine = Engine::new(composition, transport, update_tx, control_rx, quit.clone());
        let engine_thread = std::thread::spawn(move || engine.run());

        let mut terminal = ratatui::init();
        let result = UiApp::new(update_rx, control_tx, transport).run(&mut terminal);
        ratatui::restore();

        quit.store(true, Ordering::Relaxed);
        let _ = engine_thread.join();

        result
    }
}
