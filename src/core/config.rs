//! Deployment configuration.
//!
//! The page has no user-facing controls. The only knobs are baked into the
//! served document as a JSON blob; anything missing falls back to defaults.
//!
//! The `try_*` forms return the problem so a caller that has not installed a
//! subscriber yet can report it later; the plain forms warn and fall back.

use serde::Deserialize;
use std::time::Duration;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProbeConfig {
    /// Per-query deadline. `None` waits for every query however long it takes.
    #[serde(default)]
    pub query_timeout_ms: Option<u32>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            query_timeout_ms: None,
            log_level: default_log_level(),
        }
    }
}

impl ProbeConfig {
    /// Parse the config blob. Blank input is the defaults.
    pub fn try_from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| ConfigError::InvalidJson(e.to_string()))
    }

    /// Like [`ProbeConfig::try_from_json_str`], but invalid JSON is logged and
    /// gives the defaults.
    pub fn from_json_str(raw: &str) -> Self {
        Self::try_from_json_str(raw).unwrap_or_else(|e| {
            tracing::warn!("{}; using defaults", e);
            Self::default()
        })
    }

    pub fn query_timeout(&self) -> Option<Duration> {
        self.query_timeout_ms
            .map(|ms| Duration::from_millis(u64::from(ms)))
    }

    pub fn try_max_level(&self) -> Result<tracing::Level, ConfigError> {
        parse_log_level(&self.log_level)
            .ok_or_else(|| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }

    /// Configured level; an unknown name is logged and gives `INFO`.
    pub fn max_level(&self) -> tracing::Level {
        self.try_max_level().unwrap_or_else(|e| {
            tracing::warn!("{}", e);
            tracing::Level::INFO
        })
    }
}

pub fn parse_log_level(v: &str) -> Option<tracing::Level> {
    match v.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(tracing::Level::TRACE),
        "debug" => Some(tracing::Level::DEBUG),
        "info" => Some(tracing::Level::INFO),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "error" => Some(tracing::Level::ERROR),
        _ => None,
    }
}
