use anyhow::Result;
use clap::{Parser, Subcommand};
use crop_core::Config;
use crop_core::provider::provider_from_config;
use inquire::{InquireError, Text};

use crate::session;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "crop", version, about = "Crop prediction CLI")]
pub struct Cli {
    /// Log request and response details.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set and persist the prediction service endpoint.
    Configure,

    /// Predict the crop and dish for a city.
    Predict {
        /// City name; prompts interactively when omitted.
        city: Option<String>,

        /// Override the configured service endpoint for this run.
        #[arg(long)]
        endpoint: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        // Bare `crop` drops into the interactive session.
        match self.command.unwrap_or(Command::Predict { city: None, endpoint: None }) {
            Command::Configure => configure(),
            Command::Predict { city, endpoint } => predict(city, endpoint).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let base_url = match Text::new("Prediction service URL")
        .with_initial_value(&config.service.base_url)
        .prompt()
    {
        Ok(base_url) => base_url,
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => return Ok(()),
        Err(err) => return Err(err.into()),
    };

    config.set_base_url(base_url);
    config.save()?;

    println!("Saved endpoint to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn predict(city: Option<String>, endpoint: Option<String>) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(endpoint) = endpoint {
        config.set_base_url(endpoint);
    }

    let provider = provider_from_config(&config);

    match city {
        Some(city) => session::run_once(&provider, city).await,
        None => session::run_interactive(&provider).await,
    }
}
