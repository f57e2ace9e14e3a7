//! Unified path management for ladle configuration and data files.
//!
//! This ensures consistency across all platforms (Linux, macOS, Windows).

use std::path::PathBuf;

/// Default file name for the local data document.
pub const LOCAL_DATA_FILE: &str = "local_data.json";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for ladle.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/ladle/             # Config directory
/// ├── config.toml              # Application configuration
/// └── secret.json              # API keys and secrets
///
/// ~/.local/share/ladle/        # Data directory
/// └── local_data.json          # Profile + saved recipes document
/// ```
pub struct LadlePaths;

impl LadlePaths {
    /// Returns the ladle configuration directory (e.g., `~/.config/ladle/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("ladle"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the ladle data directory (e.g., `~/.local/share/ladle/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join("ladle"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file (config.toml).
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the secrets file (secret.json).
    ///
    /// # Security Note
    ///
    /// The file is plaintext JSON; it should carry restrictive permissions
    /// (e.g., 600) to prevent unauthorized access.
    pub fn secret_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("secret.json"))
    }

    /// Returns the default path to the local data document.
    pub fn local_data_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join(LOCAL_DATA_FILE))
    }
}
