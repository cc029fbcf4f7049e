//! Configuration — documents folder resolution.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Name of the configuration file holding the documents folder path.
pub const FOLDER_FILE: &str = "folder.txt";

/// Read the documents folder path from a configuration file.
///
/// The file contains a single line: the path of the folder to load.
/// A missing file, a read failure, or an empty path is a configuration
/// error — the caller treats these as fatal.
pub fn read_folder_path(config_path: &Path) -> Result<PathBuf> {
    let raw = std::fs::read_to_string(config_path).map_err(|e| {
        Error::Config(format!("cannot read {}: {}", config_path.display(), e))
    })?;

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::Config(format!(
            "{} is empty, expected a folder path",
            config_path.display()
        )));
    }

    Ok(PathBuf::from(trimmed))
}
