use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::pagination::{DASHBOARD_PER_PAGE, PER_PAGE};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server address (e.g., "0.0.0.0:8080")
    #[serde(default = "default_addr")]
    pub addr: String,
    /// Directory holding the built frontend, served as a SPA fallback
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    /// Records API connection
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
    /// Values handed to the frontend
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Base URL of the records API (e.g., "https://records.example.com/api")
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Header carrying the session token on every upstream call
    #[serde(default = "default_auth_header")]
    pub auth_header: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_header: default_auth_header(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_dashboard_page_size")]
    pub dashboard_page_size: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            dashboard_page_size: default_dashboard_page_size(),
        }
    }
}

// Default value functions
fn default_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("webapp/dist")
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_auth_header() -> String {
    "Authentication".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_page_size() -> usize {
    PER_PAGE
}

fn default_dashboard_page_size() -> usize {
    DASHBOARD_PER_PAGE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            static_dir: default_static_dir(),
            upstream: UpstreamConfig::default(),
            log: LogConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.upstream.base_url.trim().is_empty() {
            anyhow::bail!("upstream.base_url must not be empty");
        }
        if self.ui.page_size == 0 || self.ui.dashboard_page_size == 0 {
            anyhow::bail!("ui page sizes must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.addr, "0.0.0.0:8080");
        assert_eq!(config.upstream.auth_header, "Authentication");
        assert_eq!(config.ui.page_size, 10);
        assert_eq!(config.ui.dashboard_page_size, 5);
    }

    #[test]
    fn test_toml_parse() {
        let toml_str = r#"
            addr = "127.0.0.1:9000"

            [upstream]
            base_url = "https://records.example.com/api"
            timeout_secs = 5

            [log]
            level = "debug"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.addr, "127.0.0.1:9000");
        assert_eq!(config.upstream.base_url, "https://records.example.com/api");
        assert_eq!(config.upstream.timeout_secs, 5);
        assert_eq!(config.upstream.auth_header, "Authentication");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.static_dir, PathBuf::from("webapp/dist"));
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let mut config = Config::default();
        config.ui.page_size = 0;
        assert!(config.validate().is_err());
    }
}
