//! `termsplash timing` command implementation

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use crate::config::Config;
use crate::splash::{Schedule, ScheduleOptions};

#[derive(Args, Default)]
pub struct TimingArgs {
    /// Override the configured command lines (repeatable, in order)
    #[arg(long = "line", value_name = "LINE")]
    pub lines: Vec<String>,

    /// Override the minimum total visible duration, in milliseconds
    #[arg(long, value_name = "MS")]
    pub duration_ms: Option<u64>,
}

pub fn run(config_path: Option<&Path>, args: TimingArgs) -> Result<()> {
    let mut config = Config::load(config_path).context("failed to load config")?;

    if !args.lines.is_empty() {
        config.splash.lines = args.lines;
    }
    if let Some(ms) = args.duration_ms {
        config.splash.total_duration_ms = ms;
    }

    let schedule = Schedule::resolve(
        &config.splash.lines,
        &ScheduleOptions {
            total_duration_ms: config.splash.total_duration_ms,
            char_interval_ms: config.splash.char_interval_ms,
            line_pause_ms: config.splash.line_pause_ms,
        },
    );

    println!("Timing for {} line(s):", config.splash.lines.len());
    println!("  char interval   {:>6} ms", schedule.char_interval().as_millis());
    println!("  line pause      {:>6} ms", schedule.line_pause().as_millis());
    println!("  duration floor  {:>6} ms", schedule.floor().as_millis());
    println!();

    for (line, (start, end)) in config.splash.lines.iter().zip(schedule.line_spans()) {
        println!(
            "  {:>6} ms - {:>6} ms  {}",
            start.as_millis(),
            end.as_millis(),
            line
        );
    }

    println!();
    println!("  typing ends     {:>6} ms", schedule.typing_end().as_millis());
    println!("  completion at   {:>6} ms", schedule.completion_at().as_millis());

    Ok(())
}
