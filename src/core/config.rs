/// Named game constants
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Elapsed time after which the active slot moves on by itself.
/// Large enough that in practice only a button press advances the game.
pub const DEFAULT_TIMEOUT_MS: u64 = 1_000_000_000;

/// Pause between switching the old lamp off and the new one on.
pub const DEFAULT_SETTLE_MS: u64 = 250;

/// Sleep between loop iterations.
pub const DEFAULT_POLL_MS: u64 = 1;

/// Idle time after which a partial inbound line counts as complete.
pub const DEFAULT_LINE_TIMEOUT_MS: u64 = 1000;

pub const DEFAULT_BAUD: u32 = 115_200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub timeout_ms: u64,
    pub settle_ms: u64,
    pub poll_ms: u64,
    pub line_timeout_ms: u64,
    pub baud: u32,
    /// Fixed PRNG seed; `None` seeds from the board's analog noise.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            settle_ms: DEFAULT_SETTLE_MS,
            poll_ms: DEFAULT_POLL_MS,
            line_timeout_ms: DEFAULT_LINE_TIMEOUT_MS,
            baud: DEFAULT_BAUD,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }

    pub fn line_timeout(&self) -> Duration {
        Duration::from_millis(self.line_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_named_constants() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.timeout(), Duration::from_millis(DEFAULT_TIMEOUT_MS));
        assert_eq!(cfg.settle(), Duration::from_millis(250));
        assert_eq!(cfg.baud, 115_200);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn config_round_trips_through_json() {
        let cfg = GameConfig { seed: Some(9), ..GameConfig::default() };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"timeout_ms\":1000000000"));
        assert_eq!(serde_json::from_str::<GameConfig>(&json).unwrap(), cfg);
    }
}
