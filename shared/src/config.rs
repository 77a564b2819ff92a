use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 15_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API base URL must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
    #[error("Request timeout must be a whole number of milliseconds, got {0:?}")]
    InvalidTimeout(String),
    #[error("Unknown log level {0:?} (expected debug, info, warn or error)")]
    InvalidLogLevel(String),
}

/// Process-wide settings, resolved once before the first render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend root without a trailing slash
    pub api_base_url: String,
    /// `None` disables the per-request timeout
    pub request_timeout_ms: Option<u32>,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: Some(DEFAULT_REQUEST_TIMEOUT_MS),
            log_level: LogLevel::Info,
        }
    }
}

impl AppConfig {
    /// Build from raw environment values; `None` or blank keeps the default
    pub fn from_values(
        base_url: Option<&str>,
        timeout_ms: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = AppConfig::default();

        if let Some(raw) = present(base_url) {
            config.api_base_url = parse_base_url(raw)?;
        }

        if let Some(raw) = present(timeout_ms) {
            let millis = raw
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidTimeout(raw.to_string()))?;
            config.request_timeout_ms = (millis > 0).then_some(millis);
        }

        if let Some(raw) = present(log_level) {
            config.log_level = raw.parse()?;
        }

        Ok(config)
    }

    /// Absolute URL for an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let has_scheme = ["http://", "https://"]
        .iter()
        .any(|scheme| raw.len() > scheme.len() && raw.to_ascii_lowercase().starts_with(scheme));
    if !has_scheme {
        return Err(ConfigError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(raw.trim_end_matches('/').to_string())
}
