//! Data directory resolution.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use qrket_file::FileStore;

/// Open the record store, honoring an explicit data directory override.
pub fn store(override_dir: Option<&Path>) -> Result<FileStore> {
    if let Some(dir) = override_dir {
        fs::create_dir_all(dir).context("Failed to create data directory")?;
        return Ok(FileStore::new(dir));
    }

    let dirs = ProjectDirs::from("", "", "qrket").context("Could not determine data directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(FileStore::new(data_dir))
}
