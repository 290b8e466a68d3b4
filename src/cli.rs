//! Command-line interface parsing for the photo frame fetcher
//!
//! This module handles parsing of CLI arguments using clap: where the config
//! file and data directory live, an optional override of the configured
//! download limit, and the offline flag lifecycle policy.

use std::path::PathBuf;

use clap::Parser;

use crate::offline::OfflinePolicy;

/// Photoframe fetch - download random Unsplash images into a local cache
#[derive(Parser, Debug)]
#[command(name = "photofetch")]
#[command(about = "Fetches random Unsplash images into a local photo frame cache")]
#[command(version)]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config: PathBuf,

    /// Root data directory holding images/, download.log and offline.flag
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Fetch at most this many images, overriding the configured daily limit
    #[arg(long, value_name = "N")]
    pub count: Option<u32>,

    /// When the offline flag is removed after a failure
    #[arg(long, value_enum, default_value_t = OfflinePolicy::ClearOnSuccess)]
    pub offline_policy: OfflinePolicy,
}
