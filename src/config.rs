//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::client::ClientConfig;
use crate::manager::ChartTargets;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,

    #[serde(default)]
    pub charts: ChartsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Chart data endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_server_url")]
    pub server_url: String,

    #[serde(default = "default_data_path")]
    pub data_path: String,

    /// 0 disables the timeout
    #[serde(default)]
    pub request_timeout_ms: u64,

    pub session_cookie: Option<String>,
}

fn default_server_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_data_path() -> String {
    "/api/chart_data".to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            data_path: default_data_path(),
            request_timeout_ms: 0,
            session_cookie: None,
        }
    }
}

impl EndpointConfig {
    /// Client configuration for this endpoint
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            server_url: self.server_url.clone(),
            data_path: self.data_path.clone(),
            request_timeout_ms: self.request_timeout_ms,
            session_cookie: self.session_cookie.clone(),
        }
    }
}

/// Chart target configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChartsConfig {
    #[serde(default = "default_revenue_target")]
    pub revenue_target: String,

    #[serde(default = "default_hours_target")]
    pub hours_target: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_revenue_target() -> String {
    "revenueChart".to_string()
}

fn default_hours_target() -> String {
    "hoursChart".to_string()
}

fn default_output_dir() -> String {
    "./charts".to_string()
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            revenue_target: default_revenue_target(),
            hours_target: default_hours_target(),
            output_dir: default_output_dir(),
        }
    }
}

impl ChartsConfig {
    /// Targets for the two slots; they must differ since each target
    /// holds a single chart
    pub fn targets(&self) -> Result<ChartTargets, ConfigError> {
        if self.revenue_target == self.hours_target {
            return Err(ConfigError::Invalid(format!(
                "revenue_target and hours_target are both '{}'",
                self.revenue_target
            )));
        }

        Ok(ChartTargets {
            revenue: self.revenue_target.clone(),
            hours: self.hours_target.clone(),
        })
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// First existing config file in the default locations
    pub fn find_default() -> Option<PathBuf> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("earnings-charts").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        first_existing(config_paths.into_iter().flatten())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Endpoint overrides
        if let Some(url) = var("EARNINGS_CHARTS_SERVER_URL") {
            self.endpoint.server_url = url;
        }
        if let Some(path) = var("EARNINGS_CHARTS_DATA_PATH") {
            self.endpoint.data_path = path;
        }
        if let Some(cookie) = var("EARNINGS_CHARTS_SESSION_COOKIE") {
            self.endpoint.session_cookie = Some(cookie);
        }

        // Chart overrides
        if let Some(dir) = var("EARNINGS_CHARTS_OUTPUT_DIR") {
            self.charts.output_dir = dir;
        }

        // Logging overrides
        if let Some(level) = var("EARNINGS_CHARTS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("EARNINGS_CHARTS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

fn first_existing(paths: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    paths.into_iter().find(|path| path.exists())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Earnings Charts Configuration
#
# Environment variables override these settings:
# - EARNINGS_CHARTS_SERVER_URL
# - EARNINGS_CHARTS_DATA_PATH
# - EARNINGS_CHARTS_SESSION_COOKIE
# - EARNINGS_CHARTS_OUTPUT_DIR
# - EARNINGS_CHARTS_LOG_LEVEL
# - EARNINGS_CHARTS_LOG_FORMAT

[endpoint]
# Dashboard server
server_url = "http://localhost:5000"

# Chart data endpoint path
data_path = "/api/chart_data"

# Request timeout in milliseconds (0 = no timeout)
request_timeout_ms = 0

# Session cookie for the logged-in dashboard user
# session_cookie = "session=..."

[charts]
# Canvas identifiers of the two charts
revenue_target = "revenueChart"
hours_target = "hoursChart"

# Directory chart definitions are written to
output_dir = "./charts"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
