//! Configuration for the scraper

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default browser-like user agent; some sites refuse unknown clients
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Configuration for the scraper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Per-request timeout (seconds)
    pub timeout_secs: u64,

    /// Maximum requests in flight
    pub max_workers: usize,

    /// Pause after each completed fetch (milliseconds)
    pub politeness_delay_ms: u64,

    /// Attempts per URL for transient failures (1 = no retry)
    pub max_attempts: u32,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Maximum characters kept from a failure message
    pub error_message_limit: usize,
}

impl ScraperConfig {
    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get the politeness delay as a Duration
    pub fn politeness_delay(&self) -> Duration {
        Duration::from_millis(self.politeness_delay_ms)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if self.max_workers == 0 {
            return Err("max_workers must be greater than 0".to_string());
        }
        if self.max_attempts == 0 {
            return Err("max_attempts must be greater than 0".to_string());
        }
        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            max_workers: 8,
            politeness_delay_ms: 100,
            max_attempts: 1,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            error_message_limit: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ScraperConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.politeness_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_invalid_workers() {
        let config = ScraperConfig {
            max_workers: 0,
            ..ScraperConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_attempts() {
        let config = ScraperConfig {
            max_attempts: 0,
            ..ScraperConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml() {
        let config = ScraperConfig::from_toml("max_workers = 2\ntimeout_secs = 3\n").unwrap();
        assert_eq!(config.max_workers, 2);
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.politeness_delay_ms, 100);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ScraperConfig::default();
        let parsed = ScraperConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, parsed);
    }
}
