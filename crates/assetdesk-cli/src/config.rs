//! CLI configuration.
//!
//! Precedence, lowest to highest: built-in defaults, `--config` JSON file,
//! environment variables, explicit command-line flags.

use anyhow::{Context, Result};
use assetdesk_intake::Lexicon;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CATALOG_ENV: &str = "ASSETDESK_CATALOG";
pub const INVENTORY_ENV: &str = "ASSETDESK_INVENTORY";

pub const DEFAULT_CATALOG_PATH: &str = "./datasets/devices_db.txt";
pub const DEFAULT_INVENTORY_PATH: &str = "./datasets/inventory.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog_path: PathBuf,
    pub inventory_path: PathBuf,
    pub lexicon: Lexicon,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            inventory_path: PathBuf::from(DEFAULT_INVENTORY_PATH),
            lexicon: Lexicon::default(),
        }
    }
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("invalid config {}", path.display()))
    }

    /// Apply overrides from a variable lookup (normally `std::env::var`).
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(CATALOG_ENV).filter(|v| !v.trim().is_empty()) {
            self.catalog_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(INVENTORY_ENV).filter(|v| !v.trim().is_empty()) {
            self.inventory_path = PathBuf::from(path);
        }
    }

    /// Resolve the effective configuration.
    pub fn load(
        config_file: Option<&Path>,
        catalog: Option<PathBuf>,
        inventory: Option<PathBuf>,
    ) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        if let Some(path) = catalog {
            config.catalog_path = path;
        }
        if let Some(path) = inventory {
            config.inventory_path = path;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assetdesk.json");
        std::fs::write(&path, r#"{ "lexicon": { "makes": ["Dell", "HP"] } }"#).unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.catalog_path, PathBuf::from(DEFAULT_CATALOG_PATH));
        assert_eq!(config.lexicon.makes, vec!["Dell", "HP"]);
        assert_eq!(config.lexicon.models, Lexicon::default().models);
    }

    #[test]
    fn test_env_overrides_file_and_flags_override_env() {
        let mut config = AppConfig::default();
        config.apply_env(|key| match key {
            CATALOG_ENV => Some("/srv/catalog.txt".to_string()),
            INVENTORY_ENV => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.catalog_path, PathBuf::from("/srv/catalog.txt"));
        assert_eq!(config.inventory_path, PathBuf::from(DEFAULT_INVENTORY_PATH));

        let config = AppConfig::load(None, None, Some(PathBuf::from("inv.csv"))).unwrap();
        assert_eq!(config.inventory_path, PathBuf::from("inv.csv"));
    }

    #[test]
    fn test_bad_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(AppConfig::from_file(&path).is_err());
    }
}
