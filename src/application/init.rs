//! Initialize workspace use case

use crate::domain::ListKind;
use crate::error::{QuickListError, Result};
use crate::infrastructure::{Config, FileSystemRepository, WorkspaceRepository};
use std::fs;
use std::path::Path;

/// Initialize a new workspace at the specified path.
pub fn init(path: &Path, default_list: ListKind) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| {
            QuickListError::Config(format!("Failed to create {}: {}", path.display(), e))
        })?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::new(default_list))?;

    tracing::info!(root = %path.display(), list = %default_list, "initialized workspace");
    println!("Initialized quicklist workspace at {}", path.display());
    println!("Default list: {}", default_list);

    Ok(())
}
