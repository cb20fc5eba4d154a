//! Config management use case

use crate::domain::ListKind;
use crate::error::{QuickListError, Result};
use crate::infrastructure::{Config, FileSystemRepository, WorkspaceRepository};
use std::str::FromStr;

/// Service for managing workspace configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "default_list" => Ok(config.default_list.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(QuickListError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: default_list, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "default_list" => {
                config.default_list = ListKind::from_str(value).map_err(QuickListError::Config)?;
            }
            "created" => {
                return Err(QuickListError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(QuickListError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: default_list",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
