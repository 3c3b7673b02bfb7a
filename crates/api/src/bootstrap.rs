//! Startup preparation that must finish before the listener binds.

use std::path::{Path, PathBuf};

/// A required working directory could not be created.
#[derive(Debug, thiserror::Error)]
#[error("Failed to create directory {}: {source}", path.display())]
pub struct BootstrapError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Ensure every directory exists, creating missing ones with their parents.
///
/// Returns the directories that were created by this call. Existing
/// directories are left untouched, so repeated calls are harmless.
pub fn ensure_directories(dirs: &[&Path]) -> Result<Vec<PathBuf>, BootstrapError> {
    let mut created = Vec::new();

    for dir in dirs {
        if dir.is_dir() {
            tracing::debug!(path = %dir.display(), "Directory already present");
            continue;
        }

        std::fs::create_dir_all(dir).map_err(|source| BootstrapError {
            path: dir.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %dir.display(), "Created directory");
        created.push(dir.to_path_buf());
    }

    Ok(created)
}
