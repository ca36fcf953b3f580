//! Tic-tac-toe terminal harness.

#![warn(missing_docs)]

mod cli;
mod config;
mod render;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::CliConfig;
use session::Session;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut session = Session::new(config, cli.json);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Play => {
            info!("Starting interactive game");
            session.run(std::io::stdin().lock(), &mut out)
        }
        Command::Replay { moves } => {
            info!(count = moves.len(), "Replaying moves");
            session.replay(&moves);
            session.print(&mut out)
        }
    }
}
