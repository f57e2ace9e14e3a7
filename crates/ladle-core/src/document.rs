//! The on-disk local data document.

use crate::profile::UserProfile;
use crate::recipe::Recipe;
use serde::{Deserialize, Serialize};

/// The whole local data document, persisted as one pretty-printed JSON file.
///
/// The document carries no version field; readers tolerate missing keys by
/// substituting the defaults below. `saved_recipes` is in insertion order,
/// which is chronological with the most recent recipe last.
///
/// The in-memory representation is reloaded from disk on every read and the
/// file is rewritten wholesale on every write; there is no partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalDocument {
    #[serde(default)]
    pub user_profile: UserProfile,
    #[serde(default)]
    pub saved_recipes: Vec<Recipe>,
}
