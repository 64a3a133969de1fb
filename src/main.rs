use anyhow::Result;
use clap::Parser;

use termsplash::{cli, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    logging::init()?;
    cli::run(args).await
}
