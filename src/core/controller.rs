/// The game loop controller: start handshake, slot transitions, reporting
use crate::core::board::{Board, TextChannel};
use crate::core::config::GameConfig;
use crate::core::line::LineBuffer;
use crate::core::selector;
use crate::core::slot::{Level, Slot};
use rand::rngs::StdRng;
use rand_core::SeedableRng;
use std::time::Instant;
use tracing::{debug, info};

/// The literal inbound line that starts the game.
pub const START_COMMAND: &str = "s";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    WaitingForStart,
    /// Terminal; there is no way back short of a restart.
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Sensor,
    Timeout,
}

/// A slot change that has been reported but whose new lamp is not lit yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Slot,
    pub to: Slot,
    pub trigger: Trigger,
}

/// Read-only view of the controller for renderers and logs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub phase: Phase,
    pub active: Slot,
    pub transitions: u64,
}

pub struct Controller {
    config: GameConfig,
    phase: Phase,
    active: Slot,
    last_transition: Instant,
    pending_line: LineBuffer,
    rng: StdRng,
    transitions: u64,
}

impl Controller {
    pub fn new(config: GameConfig, rng: StdRng, now: Instant) -> Self {
        Self {
            config,
            phase: Phase::WaitingForStart,
            active: Slot::default(),
            last_transition: now,
            pending_line: LineBuffer::new(),
            rng,
            transitions: 0,
        }
    }

    /// Startup contract: all lamps off, PRNG seeded, channel opened, clock recorded.
    pub fn boot<H>(config: GameConfig, host: &mut H, now: Instant) -> Self
    where
        H: Board + TextChannel + ?Sized,
    {
        for slot in Slot::ALL {
            host.set_indicator(slot, Level::Low);
        }
        let seed = match config.seed {
            Some(seed) => seed,
            None => u64::from(host.read_entropy()),
        };
        host.open(config.baud);
        info!(seed, baud = config.baud, "controller booted");
        Self::new(config, StdRng::seed_from_u64(seed), now)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn active(&self) -> Slot {
        self.active
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            active: self.active,
            transitions: self.transitions,
        }
    }

    /// One loop iteration. When a transition fires, the old lamp is already
    /// off and the new index already reported; the caller waits the settle
    /// delay and then calls [`Controller::activate`].
    pub fn step<H>(&mut self, host: &mut H, now: Instant) -> Option<Transition>
    where
        H: Board + TextChannel + ?Sized,
    {
        match self.phase {
            Phase::WaitingForStart => {
                self.poll_start(host, now);
                None
            }
            Phase::Running => self.poll_running(host, now),
        }
    }

    /// Light the lamp of a transition returned by [`Controller::step`].
    pub fn activate<B: Board + ?Sized>(&mut self, board: &mut B, transition: &Transition) {
        board.set_indicator(transition.to, Level::High);
    }

    fn poll_start<C: TextChannel + ?Sized>(&mut self, channel: &mut C, now: Instant) {
        while let Some(byte) = channel.read_byte() {
            if let Some(line) = self.pending_line.push(byte, now) {
                if self.accept_start(&line) {
                    return;
                }
            }
        }
        if let Some(line) = self.pending_line.flush_idle(now, self.config.line_timeout()) {
            self.accept_start(&line);
        }
    }

    fn accept_start(&mut self, line: &str) -> bool {
        let line = line.trim();
        if line == START_COMMAND {
            self.phase = Phase::Running;
            self.pending_line.clear();
            info!("start signal received, game running");
            true
        } else {
            debug!(line, "ignoring console line while waiting for start");
            false
        }
    }

    fn poll_running<H>(&mut self, host: &mut H, now: Instant) -> Option<Transition>
    where
        H: Board + TextChannel + ?Sized,
    {
        let level = host.read_sensor(self.active);
        let elapsed = now.saturating_duration_since(self.last_transition);

        let trigger = if level == Level::Low {
            Trigger::Sensor
        } else if elapsed > self.config.timeout() {
            Trigger::Timeout
        } else {
            return None;
        };

        self.last_transition = now;
        host.set_indicator(self.active, Level::Low);
        let from = self.active;
        let to = selector::choose_next(from, &mut self.rng);
        self.active = to;
        self.transitions += 1;
        host.write_line(&to.to_string());
        info!(from = %from, to = %to, ?trigger, "slot transition");

        Some(Transition { from, to, trigger })
    }
}
