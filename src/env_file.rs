use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info, warn};

/// Search the working directory and its ancestors for a `.env` file and
/// merge its entries into the process environment. Variables that are
/// already set keep their value. Returns the path of the loaded file, or
/// `None` when no file was found or it could not be read.
pub fn load() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            info!("Loaded environment from {}", path.display());
            Some(path)
        }
        Err(err) if err.not_found() => {
            debug!("No .env file found in the working directory or its parents");
            None
        }
        Err(err) => {
            warn!("Ignoring unreadable .env file: {}", err);
            None
        }
    }
}

/// Merge a specific env file into the process environment. Unlike [`load`],
/// a missing or unreadable file is an error here since the caller named it.
pub fn load_from(path: &Path) -> Result<()> {
    dotenvy::from_path(path)
        .with_context(|| format!("Failed to load env file: {}", path.display()))?;
    info!("Loaded environment from {}", path.display());
    Ok(())
}
