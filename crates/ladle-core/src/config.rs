//! Configuration and secret schemas.
//!
//! `RootConfig` is the shape of `~/.config/ladle/config.toml` (non-secret
//! settings); `SecretConfig` is the shape of `~/.config/ladle/secret.json`
//! (API credentials). Loading lives in the infrastructure crate.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Non-secret application settings (config.toml).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RootConfig {
    /// The 4-digit user code; when absent one is resolved from the
    /// environment or generated at startup.
    #[serde(default)]
    pub user_code: Option<String>,
    /// Generator model override.
    #[serde(default)]
    pub model: Option<String>,
    /// Local data file override; defaults to `local_data.json` in the
    /// platform data directory.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

/// Secret configuration (secret.json).
///
/// All sections are optional so a partially filled file still loads; a
/// missing section simply disables that integration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub groq: Option<GroqSecret>,
    #[serde(default)]
    pub supabase: Option<SupabaseSecret>,
}

/// Groq API credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqSecret {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

/// Supabase project credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupabaseSecret {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`
    pub url: String,
    /// The anon/service API key sent as both `apikey` and bearer token.
    pub key: String,
}
