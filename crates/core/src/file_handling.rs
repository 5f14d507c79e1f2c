//! Reading and writing of the configuration document and generated files.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::config::ProjectConfig;
use crate::error::{Error, Result};

fn path_string(path: &Path) -> String {
    path.display().to_string()
}

/// Whether the project has been initialised, i.e. its configuration document exists.
pub fn config_exists(config_path: &Path) -> bool {
    config_path.is_file()
}

/// Reads the configuration document.
///
/// # Errors
///
/// Returns an error if:
/// - The document does not exist ([`Error::NotInitialized`])
/// - The file cannot be read
/// - The JSON doesn't match the expected structure
pub fn read_config(config_path: &Path) -> Result<ProjectConfig> {
    if !config_exists(config_path) {
        return Err(Error::not_initialized(path_string(config_path)));
    }

    let contents = fs::read_to_string(config_path)
        .map_err(|e| Error::io_error("config".to_string(), path_string(config_path), e))?;

    serde_json::from_str(&contents).map_err(|e| {
        Error::json_error(
            "reading".to_string(),
            "config".to_string(),
            path_string(config_path),
            e,
        )
    })
}

/// Writes the configuration document in full, pretty-printed with two space indentation.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_config(config_path: &Path, config: &ProjectConfig) -> Result<()> {
    let mut contents = serde_json::to_string_pretty(config).map_err(|e| {
        Error::json_error(
            "writing".to_string(),
            "config".to_string(),
            path_string(config_path),
            e,
        )
    })?;
    contents.push('\n');

    write_file("config", config_path, &contents)
}

/// Creates a directory and any missing parents.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_dir(path: &Path) -> Result<()> {
    debug!("Ensuring directory `{}`", path.display());
    fs::create_dir_all(path)
        .map_err(|e| Error::io_error("directory".to_string(), path_string(path), e))
}

/// Writes a file, creating its parent directory first. Existing files are overwritten.
///
/// # Errors
///
/// Returns an error if the parent directory or the file cannot be written.
pub fn write_file(file_description: &str, path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }

    fs::write(path, contents)
        .map_err(|e| Error::io_error(file_description.to_string(), path_string(path), e))?;
    info!("Wrote {} file `{}`", file_description, path.display());

    Ok(())
}
