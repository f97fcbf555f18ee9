//! Client configuration resolved at build time.
//!
//! A browser bundle has no process environment, so values are baked in by
//! `option_env!` when the crate is compiled:
//!
//! - `WORKSPACES_API_BASE`: REST base path or URL, default `/api`
//! - `WORKSPACES_LOG_LEVEL`: `error|warn|info|debug|trace`, default `info`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::LevelFilter;
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid WORKSPACES_API_BASE '{0}' (expected a path starting with '/' or an http(s) URL)")]
    ApiBase(String),

    #[error("invalid WORKSPACES_LOG_LEVEL '{0}'")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix every endpoint path is joined onto, without trailing slash.
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl ClientConfig {
    /// Build typed config from raw optional values.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first value that fails to parse.
    pub fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self { api_base: parse_api_base(api_base)?, log_level: parse_log_level(log_level)? })
    }

    /// Config baked in at compile time.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a baked-in value is invalid; callers
    /// fall back to [`ClientConfig::default`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("WORKSPACES_API_BASE"), option_env!("WORKSPACES_LOG_LEVEL"))
    }
}

fn parse_api_base(raw: Option<&str>) -> Result<String, ConfigError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(DEFAULT_API_BASE.to_owned()),
        Some(raw) => raw,
    };
    let valid = raw.starts_with('/') || raw.starts_with("http://") || raw.starts_with("https://");
    if !valid {
        return Err(ConfigError::ApiBase(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_log_level(raw: Option<&str>) -> Result<LevelFilter, ConfigError> {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") => Ok(DEFAULT_LOG_LEVEL),
        Some("error") => Ok(LevelFilter::Error),
        Some("warn") => Ok(LevelFilter::Warn),
        Some("info") => Ok(LevelFilter::Info),
        Some("debug") => Ok(LevelFilter::Debug),
        Some("trace") => Ok(LevelFilter::Trace),
        Some(other) => Err(ConfigError::LogLevel(other.to_owned())),
    }
}
