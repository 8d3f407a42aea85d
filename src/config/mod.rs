//! Configuration Module - TOML-based Calculator Configuration
//!
//! Loads and validates optional settings from a TOML file. Every
//! section has defaults, so running without a file behaves exactly like
//! an empty one. The stake weights are not configurable: they live in
//! the domain layer as constants.

pub mod loader;

use serde::Deserialize;

use crate::adapters::report::ReportFormat;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
  /// Log filter and format.
  #[serde(default)]
  pub logging: LoggingConfig,
  /// Report rendering.
  #[serde(default)]
  pub output: OutputConfig,
}

/// Log output format on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
  /// Human-readable lines.
  #[default]
  Pretty,
  /// One JSON object per event.
  Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
  /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins.
  #[serde(default = "default_log_level")]
  pub level: String,
  /// Output format.
  #[serde(default)]
  pub format: LogFormat,
}

/// Report configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
  /// Report format.
  #[serde(default)]
  pub format: ReportFormat,
  /// Prefix for every monetary figure in the text report.
  #[serde(default = "default_currency_symbol")]
  pub currency_symbol: String,
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      level: default_log_level(),
      format: LogFormat::default(),
    }
  }
}

impl Default for OutputConfig {
  fn default() -> Self {
    Self {
      format: ReportFormat::default(),
      currency_symbol: default_currency_symbol(),
    }
  }
}

// Default value functions for serde

fn default_log_level() -> String {
  "warn".to_string()
}

fn default_currency_symbol() -> String {
  "$".to_string()
}
