mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, PlayArgs};
use moleboard::{hint, sim, GameConfig};
use std::fs::File;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Hint) => {
            // stdout carries the frames, so logs go to stderr
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .init();
            let stdin = std::io::stdin().lock();
            let stdout = std::io::stdout().lock();
            hint::translate(stdin, stdout)?;
        }
        command => {
            let args = match command {
                Some(Commands::Play(args)) => args,
                _ => PlayArgs::default(),
            };
            // the simulator owns the terminal, so logs go to a file
            let file = File::create(&args.log_file)
                .with_context(|| format!("cannot create log file {}", args.log_file.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();

            let config = GameConfig::from(&args);
            info!(config = %serde_json::to_string(&config)?, "starting simulator");
            sim::run(config).await?;
        }
    }

    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
