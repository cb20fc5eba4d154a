//! Configuration management

use crate::domain::ListKind;
use crate::error::{QuickListError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the per-workspace metadata directory
pub const WORKSPACE_DIR: &str = ".quicklist";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// List used when a command doesn't name one
    #[serde(default)]
    pub default_list: ListKind,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(default_list: ListKind) -> Self {
        Config {
            default_list,
            created: Utc::now(),
        }
    }

    /// Load config from .quicklist/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WORKSPACE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                QuickListError::NotInitialized(path.to_path_buf())
            } else {
                QuickListError::Config(format!("Failed to read config.toml: {}", e))
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| QuickListError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .quicklist/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let workspace_dir = path.join(WORKSPACE_DIR);
        let config_path = workspace_dir.join("config.toml");

        if !workspace_dir.exists() {
            fs::create_dir(&workspace_dir)
                .map_err(|e| QuickListError::Config(format!("Failed to create {}: {}", WORKSPACE_DIR, e)))?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| QuickListError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)
            .map_err(|e| QuickListError::Config(format!("Failed to write config.toml: {}", e)))?;

        Ok(())
    }
}
