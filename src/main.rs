//! Photoframe Fetch - cache random Unsplash images for a photo frame
//!
//! Reads the daily limit and API key from `config.json` (with an environment
//! fallback for the key), then runs the sequential download-and-cache loop.
//! A run that goes offline partway still exits 0; only an unresolvable API
//! key or broken local setup is a hard failure.

mod api;
mod cli;
mod config;
mod fetcher;
mod log;
mod offline;
mod paths;

use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;

use api::UnsplashClient;
use cli::Cli;
use config::{Config, ConfigError};
use fetcher::{FetchReport, Fetcher};
use paths::FetchPaths;

/// Errors that abort the run before or outside the fetch loop
#[derive(Debug, Error)]
enum AppError {
    /// No API key in the config file or the environment
    #[error("Unsplash key missing")]
    MissingKey,

    /// Configuration file could not be loaded
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Local filesystem bookkeeping failed (log, flag, images directory)
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

async fn run(cli: &Cli) -> Result<FetchReport, AppError> {
    let config = Config::load(&cli.config)?;
    let api_key = config.api_key().ok_or(AppError::MissingKey)?;
    let count = cli.count.unwrap_or_else(|| config.daily_limit());

    let paths = FetchPaths::new(&cli.data_dir);
    let client = UnsplashClient::new(api_key);
    let fetcher = Fetcher::new(&client, paths, cli.offline_policy);

    Ok(fetcher.run(count).await?)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(AppError::MissingKey) => {
            // Goes to stdout; callers match on this exact message
            println!("Unsplash key missing");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("photofetch: {}", err);
            ExitCode::FAILURE
        }
    }
}
