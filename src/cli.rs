use clap::{Args, Parser, Subcommand};
use moleboard::core::config::{
    GameConfig, DEFAULT_BAUD, DEFAULT_LINE_TIMEOUT_MS, DEFAULT_POLL_MS, DEFAULT_SETTLE_MS,
    DEFAULT_TIMEOUT_MS,
};
use std::path::PathBuf;

/// Log destination while the simulator owns the terminal.
pub const DEFAULT_LOG_FILE: &str = "moleboard.log";

#[derive(Parser, Debug)]
#[command(name = "moleboard")]
#[command(about = "Four-lamp reactive game controller with a terminal board simulator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play on a simulated board in this terminal (default)
    Play(PlayArgs),
    /// Turn slot reports read from stdin into lamp frame names on stdout
    Hint,
}

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// Idle time in milliseconds before the active slot moves on by itself
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Pause in milliseconds between switching one lamp off and the next on
    #[arg(long, default_value_t = DEFAULT_SETTLE_MS)]
    pub settle_ms: u64,

    /// Sleep between loop iterations in milliseconds (0 = just yield)
    #[arg(long, default_value_t = DEFAULT_POLL_MS)]
    pub poll_ms: u64,

    /// Idle time after which a partial console line counts as sent
    #[arg(long, default_value_t = DEFAULT_LINE_TIMEOUT_MS)]
    pub line_timeout_ms: u64,

    /// Symbol rate of the serial console
    #[arg(long, default_value_t = DEFAULT_BAUD)]
    pub baud: u32,

    /// Fixed random seed for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write logs while the terminal is in use
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

impl Default for PlayArgs {
    fn default() -> Self {
        let cfg = GameConfig::default();
        Self {
            timeout_ms: cfg.timeout_ms,
            settle_ms: cfg.settle_ms,
            poll_ms: cfg.poll_ms,
            line_timeout_ms: cfg.line_timeout_ms,
            baud: cfg.baud,
            seed: cfg.seed,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl From<&PlayArgs> for GameConfig {
    fn from(args: &PlayArgs) -> Self {
        Self {
            timeout_ms: args.timeout_ms,
            settle_ms: args.settle_ms,
            poll_ms: args.poll_ms,
            line_timeout_ms: args.line_timeout_ms,
            baud: args.baud,
            seed: args.seed,
        }
    }
}
