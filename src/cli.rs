//! Command-line interface parsing for City Weather
//!
//! This module handles parsing of CLI arguments using clap. Every option can
//! also come from the environment, which is the expected way to provide the
//! WeatherAPI.com key.

use std::path::PathBuf;

use clap::Parser;
use directories::ProjectDirs;
use reqwest::Url;
use thiserror::Error;

use crate::data::weather::DEFAULT_BASE_URL;

/// Error types for CLI argument handling
#[derive(Debug, Error)]
pub enum CliError {
    /// No API key on the command line or in the environment
    #[error("Missing API key: pass --api-key or set WEATHERAPI_KEY")]
    MissingApiKey,

    /// The base URL does not parse as an http(s) URL
    #[error("Invalid base URL: '{0}'. Expected an http:// or https:// URL")]
    InvalidBaseUrl(String),
}

/// City Weather - current conditions by city, with a session search history
#[derive(Parser, Debug)]
#[command(name = "cityweather")]
#[command(about = "Current weather for any city, with a session search history")]
#[command(version)]
pub struct Cli {
    /// WeatherAPI.com API key
    #[arg(long, env = "WEATHERAPI_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the weather API
    #[arg(long, env = "WEATHERAPI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Keep a neutral accent instead of a random color after each search
    #[arg(long)]
    pub no_accent: bool,

    /// Where to write logs (defaults to the platform data directory)
    #[arg(long, env = "CITYWEATHER_LOG", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// WeatherAPI.com API key
    pub api_key: String,
    /// Base URL without a trailing slash
    pub base_url: String,
    /// Whether successful searches pick a random accent color
    pub accent_enabled: bool,
    /// Log file path, if one could be determined
    pub log_file: Option<PathBuf>,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with validated settings
    /// * `Err(CliError)` if the key is missing or the base URL is invalid
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let api_key = cli
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(CliError::MissingApiKey)?
            .to_string();

        let base_url = parse_base_url(&cli.base_url)?;

        Ok(StartupConfig {
            api_key,
            base_url,
            accent_enabled: !cli.no_accent,
            log_file: cli.log_file.clone().or_else(default_log_path),
        })
    }
}

/// Validates a base URL and strips any trailing slash
pub fn parse_base_url(raw: &str) -> Result<String, CliError> {
    let url = Url::parse(raw).map_err(|_| CliError::InvalidBaseUrl(raw.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(CliError::InvalidBaseUrl(raw.to_string()));
    }

    Ok(raw.trim_end_matches('/').to_string())
}

/// Default log location, e.g. `~/.local/share/cityweather/cityweather.log` on Linux
pub fn default_log_path() -> Option<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "cityweather")?;
    Some(project_dirs.data_local_dir().join("cityweather.log"))
}
