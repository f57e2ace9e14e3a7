//! Local JSON-file store implementation.
//!
//! The whole local state is one pretty-printed JSON document; every read
//! reloads the file and every mutation rewrites it wholesale.

use crate::paths::{LadlePaths, PathError};
use crate::storage::AtomicJsonFile;
use ladle_core::document::LocalDocument;
use ladle_core::error::{LadleError, Result};
use ladle_core::profile::UserProfile;
use ladle_core::recipe::{Recipe, normalized_title};
use ladle_core::store::LocalStore;
use std::path::PathBuf;

/// The local store component backed by a single JSON file.
///
/// Duplicate-title suppression is enforced here on every
/// [`LocalStore::add_recipe`] call; there is no cached duplicate index, the
/// check always runs against the freshly loaded document.
pub struct JsonLocalStore {
    file: AtomicJsonFile<LocalDocument>,
}

impl JsonLocalStore {
    /// Creates a store at the default location
    /// (`~/.local/share/ladle/local_data.json`).
    pub fn new() -> std::result::Result<Self, PathError> {
        Ok(Self::with_path(LadlePaths::local_data_file()?))
    }

    /// Creates a store with a custom backing file (for testing and config
    /// overrides).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }
}

impl LocalStore for JsonLocalStore {
    fn load(&self) -> LocalDocument {
        self.file.load_or(LocalDocument::default())
    }

    fn save(&self, doc: &LocalDocument) -> Result<()> {
        self.file
            .save(doc)
            .map_err(|e| LadleError::data_access(format!("failed to save local data: {}", e)))
    }

    fn add_recipe(&self, title: &str, content: &str) -> bool {
        let title_clean = title.trim();
        let key = normalized_title(title_clean);

        let mut doc = self.load();
        let duplicate = doc
            .saved_recipes
            .iter()
            .any(|r| normalized_title(&r.title) == key);
        if duplicate {
            tracing::debug!(title = %title_clean, "recipe already saved locally, skipping");
            return false;
        }

        doc.saved_recipes.push(Recipe::new(title_clean, content));
        match self.save(&doc) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(title = %title_clean, error = %e, "failed to persist recipe");
                false
            }
        }
    }

    fn set_profile(&self, diet: &str, allergies: &str) {
        let mut doc = self.load();
        doc.user_profile = UserProfile::new(diet, allergies);
        if let Err(e) = self.save(&doc) {
            tracing::warn!(error = %e, "failed to persist profile");
        }
    }

    fn profile(&self) -> UserProfile {
        self.load().user_profile
    }

    fn recipes(&self) -> Vec<Recipe> {
        self.load().saved_recipes
    }

    fn replace_recipes(&self, recipes: Vec<Recipe>) -> Result<()> {
        let mut doc = self.load();
        doc.saved_recipes = recipes;
        self.save(&doc)
    }
}
