//! Configuration Loader - File Loading and Validation
//!
//! Handles loading the TOML file, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::AppConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Load and validate configuration from a TOML file.
///
/// Does not log; `log_loaded` reports the result once tracing is up.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails (including unknown keys)
/// - Validation rules are violated
pub fn load_config(path: &Path) -> Result<AppConfig> {
  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  parse_config(&content)
    .with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Load `path` if given, otherwise fall back to defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<AppConfig> {
  path.map_or_else(|| Ok(AppConfig::default()), load_config)
}

/// Report which configuration is in effect.
pub fn log_loaded(path: Option<&Path>, config: &AppConfig) {
  match path {
    Some(path) => info!(
      path = %path.display(),
      format = ?config.output.format,
      log_level = %config.logging.level,
      "Configuration loaded successfully"
    ),
    None => debug!(
      format = ?config.output.format,
      log_level = %config.logging.level,
      "No config file given, using defaults"
    ),
  }
}

/// Parse and validate configuration text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig = toml::from_str(content).context("Failed to parse TOML")?;
  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - A known log level
/// - A non-empty currency symbol
fn validate_config(config: &AppConfig) -> Result<()> {
  let level = config.logging.level.to_ascii_lowercase();
  anyhow::ensure!(
    LOG_LEVELS.contains(&level.as_str()),
    "logging.level must be one of {:?}, got '{}'",
    LOG_LEVELS,
    config.logging.level
  );

  anyhow::ensure!(
    !config.output.currency_symbol.is_empty(),
    "output.currency_symbol must not be empty"
  );

  Ok(())
}
