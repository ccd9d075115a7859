//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use verity_heuristics::HeuristicsConfig;
use verity_scraper::ScraperConfig;
use verity_store::SqliteStore;

/// CLI configuration, stored at `~/.verity/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// File locations
    #[serde(default)]
    pub paths: Paths,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Where verity reads and writes its files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paths {
    /// Heuristics tables (TOML); built-in tables when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heuristics: Option<PathBuf>,

    /// Scraper settings (TOML); built-in defaults when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scraper: Option<PathBuf>,

    /// Review database; `~/.verity/verity.db` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    /// Directory for results and shortlist files; current directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Directory holding verity's own files.
    pub fn home() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".verity"))
    }

    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::home()?.join("config.toml"))
    }

    /// Load configuration from the default location, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from a file, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Heuristics tables from the configured file, or the built-in defaults.
    pub fn heuristics(&self) -> Result<HeuristicsConfig> {
        match &self.paths.heuristics {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading heuristics");
                Ok(HeuristicsConfig::from_file(path)?)
            }
            None => Ok(HeuristicsConfig::default()),
        }
    }

    /// Scraper settings from the configured file, or the built-in defaults.
    pub fn scraper(&self) -> Result<ScraperConfig> {
        match &self.paths.scraper {
            Some(path) => {
                let contents = fs::read_to_string(path)?;
                ScraperConfig::from_toml(&contents).map_err(CliError::Config)
            }
            None => Ok(ScraperConfig::default()),
        }
    }

    /// Resolve a file name inside the output directory.
    pub fn output_file(&self, name: &str) -> PathBuf {
        match &self.paths.output_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }

    /// Path of the review database.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.paths.database {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::home()?.join("verity.db")),
        }
    }

    /// Open the review store, creating its directory if needed.
    pub fn open_store(&self) -> Result<SqliteStore> {
        let path = self.database_path()?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(SqliteStore::new(&path)?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(config: &Config, path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, toml::to_string_pretty(config).unwrap()).unwrap();
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert!(config.paths.heuristics.is_none());
        assert_eq!(config.output_file("results.json"), PathBuf::from("results.json"));
    }

    #[test]
    fn test_written_config_loads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.format = OutputFormat::Json;
        config.paths.output_dir = Some(dir.path().join("out"));
        write_config(&config, &path);

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.output_file("results.json"), dir.path().join("out").join("results.json"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\nformat = \"quiet\"\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.settings.format, OutputFormat::Quiet);
        assert!(loaded.settings.color);
    }

    #[test]
    fn test_heuristics_file_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("heuristics.toml");
        fs::write(&path, "[quotas]\nHIGH = 2\n").unwrap();

        let mut config = Config::default();
        config.paths.heuristics = Some(path);

        let heuristics = config.heuristics().unwrap();
        assert_eq!(heuristics.quotas.high, 2);
        assert_eq!(heuristics.quotas.medium, 8);
    }

    #[test]
    fn test_invalid_scraper_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scraper.toml");
        fs::write(&path, "max_workers = 0\n").unwrap();

        let mut config = Config::default();
        config.paths.scraper = Some(path);

        assert!(matches!(config.scraper(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_open_store_in_custom_location() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.paths.database = Some(dir.path().join("db").join("reviews.db"));

        assert!(config.open_store().is_ok());
        assert!(dir.path().join("db").join("reviews.db").exists());
    }
}
