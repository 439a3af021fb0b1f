use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::{Error, Result};

/// With nine or more pairs the id rule turns ambiguous ("9" would also
/// match "91"), so the image list is capped at eight.
pub const MAX_PAIRS: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Face artwork, one asset per pair; pair count equals the list length.
    #[serde(default = "default_card_images")]
    pub card_images: Vec<String>,
    #[serde(default = "default_columns")]
    pub columns: u32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_config_version")]
    pub config_version: u32,
}

fn default_card_images() -> Vec<String> {
    [
        "assets/sun.png",
        "assets/moon.png",
        "assets/star.png",
        "assets/leaf.png",
        "assets/wave.png",
        "assets/acorn.png",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_columns() -> u32 {
    4
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_config_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            card_images: default_card_images(),
            columns: default_columns(),
            log_level: default_log_level(),
            config_version: default_config_version(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)?;

            match toml::from_str::<Config>(&contents) {
                Ok(mut config) => {
                    if config.config_version < default_config_version() {
                        config = Self::migrate_config(config)?;
                        config.save()?;
                    }
                    config.validate()?;
                    Ok(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse config: {}. Rewriting with defaults.", e);
                    let config = Self::default();
                    config.save()?;
                    Ok(config)
                }
            }
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Migrate config from older versions
    fn migrate_config(mut config: Config) -> Result<Self> {
        log::info!(
            "Migrating config from v{} to v{}",
            config.config_version,
            default_config_version()
        );

        if config.config_version < 1 {
            if config.card_images.is_empty() {
                config.card_images = default_card_images();
            }
            if config.columns == 0 {
                config.columns = default_columns();
            }
        }

        config.config_version = default_config_version();
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "Invalid log level: '{}'. Must be one of: {}",
                self.log_level,
                valid_log_levels.join(", ")
            )));
        }

        if self.card_images.is_empty() {
            return Err(Error::Config(
                "card_images must name at least one asset".to_string(),
            ));
        }
        if self.card_images.len() > MAX_PAIRS {
            return Err(Error::Config(format!(
                "card_images lists {} assets; at most {} are supported",
                self.card_images.len(),
                MAX_PAIRS
            )));
        }
        if self.card_images.iter().any(|s| s.trim().is_empty()) {
            return Err(Error::Config(
                "card_images entries must not be empty".to_string(),
            ));
        }

        if self.columns == 0 {
            return Err(Error::Config(
                "columns must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "memopairs")
            .ok_or_else(|| Error::Config("Failed to determine project directories".to_string()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }
}
