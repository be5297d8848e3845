// SPDX-License-Identifier: Apache-2.0

//! Configuration management for prglean.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `PRGLEAN_`)
//! 2. Config file: `~/.config/prglean/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Point the client at a GitHub Enterprise host
//! PRGLEAN_GITHUB__API_BASE=https://github.example.com/api/v3 prglean fetch ...
//! ```

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::GleanError;

/// Application configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GitHub API settings.
    pub github: GithubConfig,
    /// Fetch pacing settings.
    pub fetch: FetchConfig,
}

/// GitHub API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Base URI of the REST API.
    pub api_base: String,
    /// Page size for paginated list endpoints (GitHub caps at 100).
    pub per_page: u8,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            per_page: 100,
        }
    }
}

/// Fetch pacing settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Seconds to wait between PRs in a bulk run.
    pub delay_seconds: f64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { delay_seconds: 1.0 }
    }
}

/// Returns the prglean configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/prglean`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("prglean");
    }
    dirs::home_dir()
        .expect("Could not determine home directory - is HOME set?")
        .join(".config")
        .join("prglean")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `PRGLEAN_` and double underscore
/// for nested keys (e.g., `PRGLEAN_GITHUB__PER_PAGE`).
///
/// # Errors
///
/// Returns `GleanError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, GleanError> {
    let config_path = config_file_path();

    let config = Config::builder()
        // Load from config file (optional - may not exist)
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        // Override with environment variables
        .add_source(
            Environment::with_prefix("PRGLEAN")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}
