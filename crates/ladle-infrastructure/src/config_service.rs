//! Configuration service implementation.
//!
//! Loads the root configuration from ~/.config/ladle/config.toml.

use crate::paths::LadlePaths;
use ladle_core::config::RootConfig;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches the root configuration.
///
/// Reads config.toml once and caches the result to avoid repeated file I/O.
/// A missing or unreadable file yields the default configuration; config is
/// optional in every respect.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a new ConfigService using the default config path.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a ConfigService reading from a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the root configuration, loading from file if not cached.
    pub fn get_config(&self) -> RootConfig {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_default();

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    fn load_config(&self) -> Option<RootConfig> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => LadlePaths::config_file().ok()?,
        };

        if !path.exists() {
            return None;
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| {
                tracing::warn!(path = %path.display(), error = %e, "failed to read config file");
                e
            })
            .ok()?;

        toml::from_str(&content)
            .map_err(|e| {
                tracing::warn!(path = %path.display(), error = %e, "failed to parse config file");
                e
            })
            .ok()
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
