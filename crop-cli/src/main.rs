//! Binary crate for the `crop` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive predictor session
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod session;
mod view;

fn init_logging(verbose: bool) {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };

    // Ignore the error if a logger was already set.
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    init_logging(cmd.verbose);
    cmd.run().await
}
