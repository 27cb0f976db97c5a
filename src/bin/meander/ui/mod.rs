//! TUI module for meander
//!
//! Renders the composition state published by the engine thread: transport
//! header, one pattern lane per voice, and a decorative texture strip in
//! alternate visual mode.

pub mod state;

mod lanes;
mod scatter;
mod transport;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};

use meander::clock::Transport;

use lanes::render_lanes;
use scatter::render_scatter;
use state::{ControlMessage, EngineUpdate};
use transport::render_transport;

/// Frames a percussion flash stays lit after its tick.
const FLASH_FRAMES: u8 = 3;

/// UI application state
pub struct UiApp {
    /// Ring buffer receiver for engine updates
    updates: Consumer<EngineUpdate>,
    /// Ring buffer sender for toggle commands
    controls: Producer<ControlMessage>,
    /// Musical transport, for the header readout
    transport: Transport,
    /// Latest received update
    current: Option<EngineUpdate>,
    /// Remaining flash frames for the kick indicator
    kick_flash: u8,
    /// Remaining flash frames for the hat indicator
    hat_flash: u8,
    /// Generator for the decorative scatter
    scatter_rng: fastrand::Rng,
    /// Whether the app should quit
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        updates: Consumer<EngineUpdate>,
        controls: Producer<ControlMessage>,
        transport: Transport,
    ) -> Self {
        Self {
            updates,
            controls,
            transport,
            current: None,
            kick_flash: 0,
            hat_flash: 0,
            scatter_rng: fastrand::Rng::new(),
            should_quit: false,
        }
    }

    /// Run the UI event loop at the visual frame rate.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_updates();

            terminal.draw(|frame| self.render(frame))?;

            if event::poll(Transport::frame_interval())? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Drain the update channel, keeping only the latest state.
    fn poll_updates(&mut self) {
        while let Ok(update) = self.updates.pop() {
            if update.kick {
                self.kick_flash = FLASH_FRAMES;
            }
            if update.hat.is_some() {
                self.hat_flash = FLASH_FRAMES;
            }
            self.current = Some(update);
        }
        self.kick_flash = self.kick_flash.saturating_sub(1);
        self.hat_flash = self.hat_flash.saturating_sub(1);
    }

    /// Handle keyboard input.
    fn handle_key(&mut self, key: KeyCode) {
        let message = match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('k') | KeyCode::Char('K') => ControlMessage::ToggleKick,
            KeyCode::Char('h') | KeyCode::Char('H') => ControlMessage::ToggleHat,
            KeyCode::Char('d') | KeyCode::Char('D') => ControlMessage::ToggleDecor,
            _ => return,
        };
        // A full control buffer only drops a toggle press; the next press
        // goes through.
        let _ = self.controls.push(message);
    }

    /// Render the UI.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Transport bar
                Constraint::Min(9),    // Pattern lanes
                Constraint::Length(4), // Decorative texture strip
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        render_transport(
            frame,
            chunks[0],
            self.current.as_ref(),
            self.transport,
            self.kick_flash > 0,
            self.hat_flash > 0,
        );

        render_lanes(frame, chunks[1], self.current.as_ref());

        let decorated = self
            .current
            .as_ref()
            .map(|update| update.decorated)
            .unwrap_or(false);
        render_scatter(frame, chunks[2], &mut self.scatter_rng, decorated);

        let help = Paragraph::new(" [K] Kick  [H] Hat  [D] Decor  [Q] Quit")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}
