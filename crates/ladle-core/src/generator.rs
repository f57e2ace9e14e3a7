//! Recipe generator trait and request model.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Input to a generation call.
///
/// `diet` and `avoid` usually come from the saved profile; `have` is the
/// free-text list of ingredients currently on hand. All fields may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeRequest {
    /// The dish the user asked for, e.g. "tomato soup"
    pub dish: String,
    /// Diet label; an empty value is presented to the generator as "general"
    #[serde(default)]
    pub diet: String,
    /// Foods to avoid (allergies etc.)
    #[serde(default)]
    pub avoid: String,
    /// Ingredients currently available
    #[serde(default)]
    pub have: String,
}

/// An abstract text-generation backend.
///
/// The core treats the output as an opaque free-text recipe; the only
/// convention relied upon downstream is a non-empty first line, from which
/// the title is derived. Generation is the one operation in the system that
/// is allowed to surface an error to the presentation layer (no retry).
#[async_trait::async_trait]
pub trait RecipeGenerator: Send + Sync {
    /// Generates recipe text for the request.
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: the full generated text
    /// - `Err(LadleError::Generation)`: the API call failed
    async fn generate(&self, request: &RecipeRequest) -> Result<String>;
}
