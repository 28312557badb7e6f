//! Configuration for the analytics library.
//!
//! Provides YAML loading, validation and environment variable
//! interpolation for the report layout, rolling IC window, summary-page
//! defaults and logging.
//!
//! # Usage
//!
//! ```rust,ignore
//! use factorview_analytics::config::load_config;
//!
//! // Load from default path (factorview.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("deploy/factorview.yaml"))?;
//!
//! println!("rolling IC window: {}", config.rolling_ic.period);
//! ```

mod observability;
mod query;
mod report;
mod rolling;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use observability::{LogFormat, LoggingConfig, ObservabilityConfig};
pub use query::QueryDefaults;
pub use report::ReportConfig;
pub use rolling::RollingIcConfig;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "factorview.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Rolling IC window.
    #[serde(default)]
    pub rolling_ic: RollingIcConfig,
    /// Detail report layout.
    #[serde(default)]
    pub report: ReportConfig,
    /// Summary page selector defaults.
    #[serde(default)]
    pub query: QueryDefaults,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to `factorview.yaml`.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<AnalyticsConfig, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    let config = load_config_from_string(&contents)?;
    debug!(path, "Loaded analytics configuration");
    Ok(config)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<AnalyticsConfig, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: AnalyticsConfig = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &AnalyticsConfig) -> Result<(), ConfigError> {
    let rolling = &config.rolling_ic;
    if rolling.period == 0 {
        return Err(ConfigError::ValidationError(
            "rolling_ic.period must be positive".to_string(),
        ));
    }
    if rolling.min_periods == 0 || rolling.min_periods > rolling.period {
        return Err(ConfigError::ValidationError(format!(
            "rolling_ic.min_periods must be between 1 and {}",
            rolling.period
        )));
    }

    let report = &config.report;
    if report.backtest_series.is_empty() {
        return Err(ConfigError::ValidationError(
            "report.backtest_series must name at least one series".to_string(),
        ));
    }
    if report.backtest_series.iter().any(|name| name.trim().is_empty()) {
        return Err(ConfigError::ValidationError(
            "report.backtest_series names must be non-empty".to_string(),
        ));
    }
    if report.drawdown_series >= report.backtest_series.len() {
        return Err(ConfigError::ValidationError(format!(
            "report.drawdown_series must index one of {} backtest series",
            report.backtest_series.len()
        )));
    }
    if report.hedge_label.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "report.hedge_label must be non-empty".to_string(),
        ));
    }

    if config.observability.logging.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "observability.logging.level must be non-empty".to_string(),
        ));
    }

    Ok(())
}
