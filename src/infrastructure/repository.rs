//! File system workspace

use crate::error::{QuickListError, Result};
use crate::infrastructure::config::WORKSPACE_DIR;
use crate::infrastructure::{Config, FileStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract workspace holding config and list storage
pub trait WorkspaceRepository {
    /// Get the root directory of this workspace
    fn root(&self) -> &Path;

    /// Load configuration from .quicklist/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .quicklist/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .quicklist directory exists
    fn is_initialized(&self) -> bool;

    /// Create .quicklist directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of WorkspaceRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover workspace root by walking up from current directory
    /// First checks QUICKLIST_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("QUICKLIST_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_workspace_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(QuickListError::Config(format!(
                    "QUICKLIST_ROOT is set to '{}' but no .quicklist directory found. \
                    Run 'quicklist init' in that directory or unset QUICKLIST_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()
            .map_err(|e| QuickListError::Config(format!("Cannot read current directory: {}", e)))?;
        Self::discover_from(&current_dir)
    }

    /// Discover workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_workspace_dir(&current) {
                tracing::debug!(root = %current.display(), "found workspace");
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(QuickListError::NotInitialized(start.to_path_buf())),
            }
        }
    }

    /// Directory holding the per-list storage files
    pub fn storage_dir(&self) -> PathBuf {
        self.root.join(WORKSPACE_DIR).join("storage")
    }

    /// Open the durable store backing this workspace's lists
    pub fn open_store(&self) -> Result<FileStore> {
        FileStore::open(self.storage_dir())
    }

    fn has_workspace_dir(path: &Path) -> bool {
        path.join(WORKSPACE_DIR).is_dir()
    }
}

impl WorkspaceRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_workspace_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let workspace_dir = self.root.join(WORKSPACE_DIR);

        if workspace_dir.exists() {
            return Err(QuickListError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&workspace_dir)
            .map_err(|e| QuickListError::Config(format!("Failed to create {}: {}", WORKSPACE_DIR, e)))?;
        fs::create_dir(self.storage_dir())?;
        Ok(())
    }
}
