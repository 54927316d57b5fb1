use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_REVEAL_DELAY_MS: u64 = 500;
const DEFAULT_PAGE_SIZE: usize = 10;

pub const KEYS: &[&str] = &["reveal-delay-ms", "page-size", "preview-limit"];

/// Client configuration, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolioConfig {
    /// How long freshly computed results stay hidden behind the loading state
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,

    /// Rows per page in the interactive browser
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Records shown per catalog on the home page; all of them when unset
    #[serde(default)]
    pub preview_limit: Option<usize>,
}

fn default_reveal_delay_ms() -> u64 {
    DEFAULT_REVEAL_DELAY_MS
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            page_size: DEFAULT_PAGE_SIZE,
            preview_limit: None,
        }
    }
}

impl FolioConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FolioError::Io)?;
        let mut config: FolioConfig =
            serde_json::from_str(&content).map_err(FolioError::Serialization)?;
        if config.page_size == 0 {
            warn!(path = %config_path.display(), "page_size 0 is not usable, using the default");
            config.page_size = DEFAULT_PAGE_SIZE;
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FolioError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FolioError::Serialization)?;
        fs::write(config_path, content).map_err(FolioError::Io)?;
        Ok(())
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Formatted value of a config key, `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "reveal-delay-ms" => Some(self.reveal_delay_ms.to_string()),
            "page-size" => Some(self.page_size.to_string()),
            "preview-limit" => Some(
                self.preview_limit
                    .map_or_else(|| "all".to_string(), |n| n.to_string()),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        match key {
            "reveal-delay-ms" => {
                self.reveal_delay_ms = value
                    .parse()
                    .map_err(|_| format!("reveal-delay-ms must be a number of milliseconds, got '{value}'"))?;
            }
            "page-size" => {
                let size: usize = value
                    .parse()
                    .map_err(|_| format!("page-size must be a positive number, got '{value}'"))?;
                if size == 0 {
                    return Err("page-size must be at least 1".to_string());
                }
                self.page_size = size;
            }
            "preview-limit" => {
                self.preview_limit = if value.eq_ignore_ascii_case("all") {
                    None
                } else {
                    Some(value.parse().map_err(|_| {
                        format!("preview-limit must be a number or 'all', got '{value}'")
                    })?)
                };
            }
            _ => return Err(format!("Unknown config key: {key}")),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = FolioConfig::default();
        assert_eq!(config.reveal_delay_ms, 500);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.preview_limit, None);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = FolioConfig::load(dir.path().join("missing")).unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn test_load_replaces_zero_page_size() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"page_size": 0}"#).unwrap();
        let config = FolioConfig::load(dir.path()).unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.reveal_delay_ms, 500);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let mut config = FolioConfig::default();
        config.set("page-size", "4").unwrap();
        config.set("preview-limit", "3").unwrap();
        config.save(dir.path().join("nested")).unwrap();

        let loaded = FolioConfig::load(dir.path().join("nested")).unwrap();
        assert_eq!(loaded.page_size, 4);
        assert_eq!(loaded.preview_limit, Some(3));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"page_size": 3}"#).unwrap();
        let loaded = FolioConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.page_size, 3);
        assert_eq!(loaded.reveal_delay_ms, 500);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = FolioConfig::default();
        assert!(config.set("page-size", "0").is_err());
        assert!(config.set("page-size", "many").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn test_preview_limit_all() {
        let mut config = FolioConfig::default();
        config.set("preview-limit", "2").unwrap();
        config.set("preview-limit", "ALL").unwrap();
        assert_eq!(config.get("preview-limit").as_deref(), Some("all"));
    }
}
