use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Order in which stays were added
    #[default]
    Insertion,
    /// Fewest remaining days first
    Remaining,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Insertion => write!(f, "insertion"),
            SortOrder::Remaining => write!(f, "remaining"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub date_format: String,
    pub sort_order: SortOrder,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
            sort_order: SortOrder::Insertion,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn load(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join("config.toml");

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save(config_dir)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;

        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join("config.toml");
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, content).context("Failed to write config file")?;
        Ok(())
    }
}

pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Failed to get home directory")?;
    let config_dir = home.join(".cdtrack");

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
    }

    Ok(config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_creates_default() {
        let dir = TempDir::new().unwrap();

        let config = Config::load(dir.path()).unwrap();

        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.toml").exists());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            date_format: "%d.%m.%Y".to_string(),
            sort_order: SortOrder::Remaining,
            log_level: "debug".to_string(),
        };

        config.save(dir.path()).unwrap();
        let loaded = Config::load(dir.path()).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "sort_order = \"remaining\"\n").unwrap();

        let config = Config::load(dir.path()).unwrap();

        assert_eq!(config.sort_order, SortOrder::Remaining);
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "sort_order = 3\n").unwrap();

        assert!(Config::load(dir.path()).is_err());
    }
}
