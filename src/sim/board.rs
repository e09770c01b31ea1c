/// In-memory board for the terminal simulator: lamps, momentary buttons, serial console
use crate::core::board::{Board, Control, TextChannel};
use crate::core::controller::Phase;
use crate::core::slot::{Level, Slot, SLOT_COUNT};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use std::collections::VecDeque;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tracing::debug;

/// How long one key press holds a button down.
pub const PRESS_HOLD: Duration = Duration::from_millis(120);

/// Console scroll-back length.
pub const CONSOLE_LINES: usize = 64;

/// Keys that double as buttons once the game runs (before that they are console text).
const BUTTON_KEYS: [char; SLOT_COUNT] = ['z', 'x', 'c', 'v'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleLine {
    /// Typed by the user and sent to the controller
    Sent(String),
    /// Written by the controller
    Received(String),
}

#[derive(Debug)]
pub struct SimBoard {
    lamps: [Level; SLOT_COUNT],
    pressed_until: [Option<Instant>; SLOT_COUNT],
    inbound: VecDeque<u8>,
    console: VecDeque<ConsoleLine>,
    edit: String,
    baud: Option<u32>,
}

impl SimBoard {
    pub fn new() -> Self {
        Self {
            lamps: [Level::Low; SLOT_COUNT],
            pressed_until: [None; SLOT_COUNT],
            inbound: VecDeque::new(),
            console: VecDeque::with_capacity(CONSOLE_LINES),
            edit: String::new(),
            baud: None,
        }
    }

    pub fn lamp(&self, slot: Slot) -> Level {
        self.lamps[slot.index()]
    }

    pub fn baud(&self) -> Option<u32> {
        self.baud
    }

    pub fn edit_line(&self) -> &str {
        &self.edit
    }

    pub fn console(&self) -> impl Iterator<Item = &ConsoleLine> {
        self.console.iter()
    }

    pub fn press(&mut self, slot: Slot, now: Instant) {
        self.pressed_until[slot.index()] = Some(now + PRESS_HOLD);
    }

    /// Button level at `now`; `Low` while a press is being held.
    pub fn button_at(&self, slot: Slot, now: Instant) -> Level {
        match self.pressed_until[slot.index()] {
            Some(until) if now < until => Level::Low,
            _ => Level::High,
        }
    }

    /// Queue a console line for the controller, newline appended.
    pub fn send_line(&mut self, line: &str) {
        self.inbound.extend(line.bytes());
        self.inbound.push_back(b'\n');
        self.log(ConsoleLine::Sent(line.to_string()));
    }

    pub fn handle_key(&mut self, key: KeyEvent, phase: Phase, now: Instant) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }
        match key.code {
            KeyCode::Esc => return Control::Quit,
            KeyCode::F(n @ 1..=4) => self.press(Slot::ALL[usize::from(n - 1)], now),
            KeyCode::Char(c) if phase == Phase::Running && BUTTON_KEYS.contains(&c) => {
                if let Some(i) = BUTTON_KEYS.iter().position(|k| *k == c) {
                    self.press(Slot::ALL[i], now);
                }
            }
            KeyCode::Char(c) => self.edit.push(c),
            KeyCode::Backspace => {
                self.edit.pop();
            }
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.edit);
                self.send_line(&line);
            }
            _ => {}
        }
        Control::Continue
    }

    fn log(&mut self, line: ConsoleLine) {
        if self.console.len() == CONSOLE_LINES {
            self.console.pop_front();
        }
        self.console.push_back(line);
    }
}

impl Default for SimBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for SimBoard {
    fn set_indicator(&mut self, slot: Slot, level: Level) {
        self.lamps[slot.index()] = level;
    }

    fn read_sensor(&mut self, slot: Slot) -> Level {
        self.button_at(slot, Instant::now())
    }

    /// Low ten bits of the wall clock's nanoseconds, the way a floating
    /// 10-bit analog pin reads as noise.
    fn read_entropy(&mut self) -> u16 {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or_default();
        (nanos & 0x3ff) as u16
    }
}

impl TextChannel for SimBoard {
    fn open(&mut self, baud: u32) {
        debug!(baud, "simulated serial opened");
        self.baud = Some(baud);
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.inbound.pop_front()
    }

    fn write_line(&mut self, line: &str) {
        self.log(ConsoleLine::Received(line.to_string()));
    }
}
