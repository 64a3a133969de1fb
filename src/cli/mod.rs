//! Command-line interface

mod play;
mod timing;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use play::PlayArgs;
pub use timing::TimingArgs;

#[derive(Parser)]
#[command(name = "termsplash", version, about = "Terminal splash screen that types shell commands, then fades to content")]
pub struct Cli {
    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Play the splash animation in the terminal (default)
    Play(PlayArgs),
    /// Print the resolved timing schedule without entering the TUI
    Timing(TimingArgs),
}

pub async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Some(Command::Play(args)) => play::run(config_path, args).await,
        Some(Command::Timing(args)) => timing::run(config_path, args),
        None => play::run(config_path, PlayArgs::default()).await,
    }
}
