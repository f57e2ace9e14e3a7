//! Supabase-backed remote store implementation.
//!
//! Talks to the project's PostgREST endpoint (`/rest/v1/...`) over plain
//! HTTP. Two logical tables are consumed: `users` (one profile row per user
//! code, upsert key `user_code`) and `recipes` (`user_code`, `title`,
//! `content`, `created_at`).
//!
//! Every operation is fail-open as required by the [`RemoteStore`] contract:
//! transport errors, policy denials (RLS) and missing rows all collapse into
//! the same empty return value, with a warning logged for the ones that were
//! actual failures.

use anyhow::{Context, Result as AnyResult, anyhow};
use chrono::{DateTime, Utc};
use ladle_core::profile::UserProfile;
use ladle_core::recipe::Recipe;
use ladle_core::store::RemoteStore;
use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::storage::SecretStorage;

/// Remote store client for a Supabase project.
///
/// Constructed with project credentials, or [`Self::disconnected`] when none
/// are available; a disconnected store answers every call with the fail-open
/// value, which degrades the whole system to local-only operation.
#[derive(Clone)]
pub struct SupabaseStore {
    client: Client,
    credentials: Option<Credentials>,
}

#[derive(Clone)]
struct Credentials {
    /// Project base URL without trailing slash.
    base_url: String,
    api_key: String,
}

impl SupabaseStore {
    /// Creates a client for the given project URL and API key.
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        let base_url = url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            credentials: Some(Credentials {
                base_url,
                api_key: key.into(),
            }),
        }
    }

    /// Creates a client with no credentials; every call fails open.
    pub fn disconnected() -> Self {
        Self {
            client: Client::new(),
            credentials: None,
        }
    }

    /// Loads credentials from ~/.config/ladle/secret.json, falling back to
    /// the `SUPABASE_URL` / `SUPABASE_KEY` environment variables.
    ///
    /// Returns a disconnected client when neither source is available; the
    /// caller keeps working against the local store alone.
    pub fn from_secrets() -> Self {
        if let Ok(storage) = SecretStorage::new() {
            if let Ok(config) = storage.load() {
                if let Some(supabase) = config.supabase {
                    return Self::new(supabase.url, supabase.key);
                }
            }
        }

        match (std::env::var("SUPABASE_URL"), std::env::var("SUPABASE_KEY")) {
            (Ok(url), Ok(key)) if !url.trim().is_empty() && !key.trim().is_empty() => {
                Self::new(url, key)
            }
            _ => {
                tracing::warn!("no Supabase credentials found, running local-only");
                Self::disconnected()
            }
        }
    }

    /// Whether this client has credentials to talk to a project.
    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    fn creds(&self) -> AnyResult<&Credentials> {
        self.credentials
            .as_ref()
            .ok_or_else(|| anyhow!("Supabase credentials not configured"))
    }

    fn table_url(&self, table: &str) -> AnyResult<String> {
        Ok(format!("{}/rest/v1/{}", self.creds()?.base_url, table))
    }

    /// Runs a PostgREST select, returning the decoded rows.
    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> AnyResult<Vec<T>> {
        let creds = self.creds()?;
        let response = self
            .client
            .get(self.table_url(table)?)
            .header("apikey", &creds.api_key)
            .header("Authorization", format!("Bearer {}", creds.api_key))
            .query(query)
            .send()
            .await
            .with_context(|| format!("select from '{}' failed", table))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("select from '{}' returned {}: {}", table, status, body));
        }

        response
            .json::<Vec<T>>()
            .await
            .with_context(|| format!("failed to decode rows from '{}'", table))
    }

    /// Runs a PostgREST insert/upsert with `return=minimal`.
    async fn write<B: Serialize>(
        &self,
        table: &str,
        query: &[(&str, String)],
        prefer: &str,
        body: &B,
    ) -> AnyResult<()> {
        let creds = self.creds()?;
        let response = self
            .client
            .post(self.table_url(table)?)
            .header("apikey", &creds.api_key)
            .header("Authorization", format!("Bearer {}", creds.api_key))
            .header("Prefer", prefer)
            .query(query)
            .json(body)
            .send()
            .await
            .with_context(|| format!("write to '{}' failed", table))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("write to '{}' returned {}: {}", table, status, body));
        }

        Ok(())
    }

    fn eq(value: &str) -> String {
        format!("eq.{}", value)
    }
}

#[async_trait::async_trait]
impl RemoteStore for SupabaseStore {
    async fn fetch_profile(&self, user_code: &str) -> Option<UserProfile> {
        if !self.is_configured() {
            return None;
        }

        let query = [
            ("user_code", Self::eq(user_code)),
            ("select", "*".to_string()),
        ];
        match self.select::<UserRow>("users", &query).await {
            Ok(rows) => rows.into_iter().next().map(UserRow::into_profile),
            Err(e) => {
                tracing::warn!(error = %e, "remote profile fetch failed, treating as absent");
                None
            }
        }
    }

    async fn upsert_profile(&self, user_code: &str, profile: &UserProfile) -> bool {
        if !self.is_configured() {
            return false;
        }

        let query = [("on_conflict", "user_code".to_string())];
        let payload = UserUpsert {
            user_code,
            diet: &profile.diet,
            allergies: &profile.allergies,
        };
        match self
            .write(
                "users",
                &query,
                "resolution=merge-duplicates,return=minimal",
                &payload,
            )
            .await
        {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "remote profile upsert failed");
                false
            }
        }
    }

    async fn recipe_exists(&self, user_code: &str, title: &str) -> bool {
        if !self.is_configured() {
            return false;
        }

        let query = [
            ("user_code", Self::eq(user_code)),
            ("title", Self::eq(title)),
            ("select", "id".to_string()),
        ];
        match self.select::<IdRow>("recipes", &query).await {
            Ok(rows) => !rows.is_empty(),
            Err(e) => {
                // Fail open so a remote outage never blocks a local save.
                tracing::warn!(error = %e, "remote duplicate check failed, assuming not present");
                false
            }
        }
    }

    async fn insert_recipe(&self, user_code: &str, recipe: &Recipe) -> bool {
        if !self.is_configured() {
            return false;
        }

        let payload = RecipeInsert {
            user_code,
            title: &recipe.title,
            content: &recipe.content,
        };
        match self
            .write("recipes", &[], "return=minimal", &payload)
            .await
        {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(title = %recipe.title, error = %e, "remote recipe insert failed");
                false
            }
        }
    }

    async fn list_recipes(&self, user_code: &str) -> Vec<Recipe> {
        if !self.is_configured() {
            return Vec::new();
        }

        let query = [
            ("user_code", Self::eq(user_code)),
            ("select", "*".to_string()),
            ("order", "created_at.desc".to_string()),
        ];
        match self.select::<RecipeRow>("recipes", &query).await {
            Ok(rows) => rows.into_iter().map(RecipeRow::into_recipe).collect(),
            Err(e) => {
                tracing::warn!(error = %e, "remote recipe listing failed, treating as empty");
                Vec::new()
            }
        }
    }
}

// ============================================================================
// PostgREST row DTOs
// ============================================================================

/// Row of the `users` table. Columns beyond the known ones are ignored;
/// nullable columns map to empty strings.
#[derive(Deserialize)]
struct UserRow {
    #[serde(default)]
    diet: Option<String>,
    #[serde(default)]
    allergies: Option<String>,
}

impl UserRow {
    fn into_profile(self) -> UserProfile {
        UserProfile {
            diet: self.diet.unwrap_or_default(),
            allergies: self.allergies.unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
struct UserUpsert<'a> {
    user_code: &'a str,
    diet: &'a str,
    allergies: &'a str,
}

/// Row of the `recipes` table.
#[derive(Deserialize)]
struct RecipeRow {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    created_at: Option<DateTime<Utc>>,
}

impl RecipeRow {
    fn into_recipe(self) -> Recipe {
        Recipe {
            title: self.title.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
struct RecipeInsert<'a> {
    user_code: &'a str,
    title: &'a str,
    content: &'a str,
}

/// Minimal projection used by the existence check; the id may be an integer
/// or a UUID depending on the table definition.
#[derive(Deserialize)]
struct IdRow {
    #[allow(dead_code)]
    id: serde_json::Value,
}
