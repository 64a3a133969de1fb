//! `termsplash play` command implementation

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use crate::config::Config;
use crate::tui::events::{Events, TICK_MS};
use crate::tui::styles::Theme;
use crate::tui::{App, TerminalGuard};

#[derive(Args, Default)]
pub struct PlayArgs {
    /// Override the configured command lines (repeatable, in order)
    #[arg(long = "line", value_name = "LINE")]
    pub lines: Vec<String>,

    /// Override the minimum total visible duration, in milliseconds
    #[arg(long, value_name = "MS")]
    pub duration_ms: Option<u64>,

    /// Allow any key press to complete the splash early
    #[arg(long)]
    pub skippable: bool,
}

pub async fn run(config_path: Option<&Path>, args: PlayArgs) -> Result<()> {
    let mut config = Config::load(config_path).context("failed to load config")?;

    // CLI flags win over file values.
    if !args.lines.is_empty() {
        config.splash.lines = args.lines;
    }
    if let Some(ms) = args.duration_ms {
        config.splash.total_duration_ms = ms;
    }
    if args.skippable {
        config.splash.skippable = true;
    }

    let theme = Theme::from_config(&config.theme).context("invalid theme")?;
    let app = App::new(&config, theme);

    let mut terminal = TerminalGuard::new()?;
    let mut events = Events::new(Duration::from_millis(TICK_MS));
    app.run(&mut terminal, &mut events).await
}
