pub mod board;
pub mod renderer;

pub use board::SimBoard;

use crate::core::board::{Board, Control, Host, TextChannel};
use crate::core::config::GameConfig;
use crate::core::controller::{Controller, Snapshot};
use crate::core::engine::Engine;
use crate::core::slot::{Level, Slot};
use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};
use tracing::info;

/// Redraw at most this often; the loop itself polls much faster.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// A `SimBoard` wired to a real terminal
pub struct Simulator {
    board: SimBoard,
    terminal: DefaultTerminal,
    last_draw: Option<Instant>,
}

impl Simulator {
    pub fn new(board: SimBoard, terminal: DefaultTerminal) -> Self {
        Self { board, terminal, last_draw: None }
    }

    fn draw(&mut self, view: &Snapshot) -> Result<()> {
        let board = &self.board;
        self.terminal.draw(|f| renderer::render(f, board, view))?;
        self.last_draw = Some(Instant::now());
        Ok(())
    }
}

impl Board for Simulator {
    fn set_indicator(&mut self, slot: Slot, level: Level) {
        self.board.set_indicator(slot, level);
    }

    fn read_sensor(&mut self, slot: Slot) -> Level {
        self.board.read_sensor(slot)
    }

    fn read_entropy(&mut self) -> u16 {
        self.board.read_entropy()
    }
}

impl TextChannel for Simulator {
    fn open(&mut self, baud: u32) {
        self.board.open(baud);
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.board.read_byte()
    }

    fn write_line(&mut self, line: &str) {
        self.board.write_line(line);
    }
}

impl Host for Simulator {
    fn service(&mut self, view: &Snapshot) -> Result<Control> {
        let mut dirty = false;

        // INPUT (Non-blocking)
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if self.board.handle_key(key, view.phase, Instant::now()) == Control::Quit {
                    return Ok(Control::Quit);
                }
                dirty = true;
            }
        }

        let due = self.last_draw.is_none_or(|t| t.elapsed() >= FRAME_INTERVAL);
        if dirty || due {
            self.draw(view)?;
        }
        Ok(Control::Continue)
    }

    fn present(&mut self, view: &Snapshot) -> Result<()> {
        self.draw(view)
    }
}

/// Boots a controller on a simulated board and plays in the current terminal.
pub async fn run(config: GameConfig) -> Result<()> {
    let mut board = SimBoard::new();
    let controller = Controller::boot(config, &mut board, Instant::now());

    let terminal = ratatui::init();
    let result = Engine::new(controller, Simulator::new(board, terminal)).run().await;
    ratatui::restore();

    let sim = result?;
    info!(lines = sim.board.console().count(), "simulator closed");
    Ok(())
}
