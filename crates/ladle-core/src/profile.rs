//! UserProfile domain model.
//!
//! Represents the dietary profile used to steer recipe generation.

use serde::{Deserialize, Serialize};

/// Dietary profile for a single user code.
///
/// Both fields are free text and may be empty; missing fields in persisted
/// documents deserialize to the empty string, never to null. There is exactly
/// one profile per user code and it is never deleted, only replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Diet label, e.g. "vegetarian" (free text, may be empty)
    #[serde(default)]
    pub diet: String,
    /// Comma-separated allergies / foods to avoid (free text, may be empty)
    #[serde(default)]
    pub allergies: String,
}

impl UserProfile {
    pub fn new(diet: impl Into<String>, allergies: impl Into<String>) -> Self {
        Self {
            diet: diet.into(),
            allergies: allergies.into(),
        }
    }
}
