use crate::model::table::DEFAULT_PAGE_SIZE;
use crate::model::ui::Theme;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Rows per vendor table page
    #[serde(default = "default_page_size")]
    pub page_size: NonZeroUsize,
    #[serde(default)]
    pub theme: Theme,
    /// Vendor file to load instead of the built-in demo data
    #[serde(default)]
    pub data_file: Option<String>,
    /// Where CSV reports are written
    #[serde(default = "default_report_dir")]
    pub report_dir: String,
    #[serde(default = "default_true")]
    pub show_splash: bool,
}

fn default_page_size() -> NonZeroUsize {
    DEFAULT_PAGE_SIZE
}

fn default_report_dir() -> String {
    ".".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            theme: Theme::Dark,
            data_file: None,
            report_dir: default_report_dir(),
            show_splash: true,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".securevendor"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Default log file location
    pub fn log_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("securevendor.log"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Ignoring invalid config {}: {}", config_path.display(), e);
                None
            }
        }
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.page_size.get(), 8);
        assert!(config.show_splash);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = serde_json::from_str::<Config>(r#"{"page_size": 0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_round_trip() {
        let config = Config {
            page_size: NonZeroUsize::new(5).unwrap(),
            theme: Theme::Light,
            data_file: Some("vendors.yaml".to_string()),
            report_dir: "/tmp/reports".to_string(),
            show_splash: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
