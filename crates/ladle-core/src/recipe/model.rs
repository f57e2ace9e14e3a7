//! Recipe domain model.

use serde::{Deserialize, Serialize};

/// A saved recipe.
///
/// `title` is a single trimmed line of at most 120 characters, derived from
/// the first non-empty line of the generated text. `content` is the full
/// trimmed generation output. Recipes are created once and never updated in
/// place or deleted.
///
/// Identity for de-duplication purposes is the case-insensitive trimmed
/// title scoped to the owning user code (see [`super::title::normalized_title`]),
/// not any surrogate id the remote store may assign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Recipe {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
