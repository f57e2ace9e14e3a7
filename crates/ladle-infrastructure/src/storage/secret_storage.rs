//! Secret configuration file storage.
//!
//! Provides loading of secret configuration from ~/.config/ladle/secret.json.

use crate::paths::LadlePaths;
use ladle_core::config::SecretConfig;
use std::fs;
use std::path::PathBuf;

/// Errors that can occur during secret storage operations.
#[derive(Debug)]
pub enum SecretStorageError {
    /// Configuration file not found.
    NotFound(PathBuf),
    /// File I/O error.
    IoError(std::io::Error),
    /// JSON parsing error.
    ParseError(serde_json::Error),
    /// Config directory not found.
    ConfigDirNotFound,
}

impl std::fmt::Display for SecretStorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecretStorageError::NotFound(path) => {
                write!(f, "Configuration file not found at: {}", path.display())
            }
            SecretStorageError::IoError(e) => write!(f, "I/O error: {}", e),
            SecretStorageError::ParseError(e) => write!(f, "JSON parse error: {}", e),
            SecretStorageError::ConfigDirNotFound => {
                write!(f, "Could not determine home directory")
            }
        }
    }
}

impl std::error::Error for SecretStorageError {}

impl From<std::io::Error> for SecretStorageError {
    fn from(e: std::io::Error) -> Self {
        SecretStorageError::IoError(e)
    }
}

impl From<serde_json::Error> for SecretStorageError {
    fn from(e: serde_json::Error) -> Self {
        SecretStorageError::ParseError(e)
    }
}

/// Storage for the secret configuration file (secret.json).
///
/// Read-only: secrets are edited by hand, never written by the application.
/// Error messages never include file contents.
///
/// # Security Note
///
/// This storage reads plaintext JSON files. The secret.json file should have
/// appropriate file permissions (e.g., 600) to prevent unauthorized access.
pub struct SecretStorage {
    path: PathBuf,
}

impl SecretStorage {
    /// Creates a new SecretStorage with the default path
    /// (~/.config/ladle/secret.json).
    pub fn new() -> Result<Self, SecretStorageError> {
        let path = LadlePaths::secret_file().map_err(|_| SecretStorageError::ConfigDirNotFound)?;
        Ok(Self { path })
    }

    /// Creates a new SecretStorage with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the secret configuration from the JSON file.
    ///
    /// # Returns
    ///
    /// - `Ok(SecretConfig)`: Successfully loaded and parsed
    /// - `Err(SecretStorageError::NotFound)`: File doesn't exist
    /// - `Err(SecretStorageError::IoError)`: Failed to read file
    /// - `Err(SecretStorageError::ParseError)`: Invalid JSON format
    pub fn load(&self) -> Result<SecretConfig, SecretStorageError> {
        if !self.path.exists() {
            return Err(SecretStorageError::NotFound(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path)?;
        let config = serde_json::from_str(&content)?;

        Ok(config)
    }

    /// Returns the path to the secret file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("secret.json");
        let storage = SecretStorage::with_path(file_path.clone());

        let result = storage.load();
        match result {
            Err(SecretStorageError::NotFound(path)) => {
                assert_eq!(path, file_path);
            }
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_load_valid_json() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("secret.json");

        let json_content = r#"{
            "groq": {
                "api_key": "test-key-123",
                "model_name": "openai/gpt-oss-20b"
            },
            "supabase": {
                "url": "https://example.supabase.co",
                "key": "anon-key"
            }
        }"#;

        fs::write(&file_path, json_content).unwrap();

        let storage = SecretStorage::with_path(file_path);
        let config = storage.load().unwrap();

        let groq = config.groq.unwrap();
        assert_eq!(groq.api_key, "test-key-123");
        assert_eq!(groq.model_name, Some("openai/gpt-oss-20b".to_string()));

        let supabase = config.supabase.unwrap();
        assert_eq!(supabase.url, "https://example.supabase.co");
        assert_eq!(supabase.key, "anon-key");
    }

    #[test]
    fn test_load_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("secret.json");

        fs::write(&file_path, r#"{"groq": {"api_key": "k"}}"#).unwrap();

        let storage = SecretStorage::with_path(file_path);
        let config = storage.load().unwrap();

        assert!(config.groq.is_some());
        assert!(config.supabase.is_none());
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("secret.json");

        fs::write(&file_path, r#"{ invalid json"#).unwrap();

        let storage = SecretStorage::with_path(file_path);
        let result = storage.load();

        assert!(matches!(result, Err(SecretStorageError::ParseError(_))));
    }
}
