//! Recipe generation use case.
//!
//! Orchestrates the external generator with the best-effort dual write to
//! the local and remote stores. Generation success is decoupled from
//! persistence success: the generated text is returned to the caller no
//! matter what the stores did with it.

use ladle_core::error::Result;
use ladle_core::generator::{RecipeGenerator, RecipeRequest};
use ladle_core::recipe::{Recipe, sanitize_title};
use ladle_core::store::{LocalStore, RemoteStore};
use std::sync::Arc;

/// Use case for generating and persisting recipes.
pub struct RecipeUsecase {
    local: Arc<dyn LocalStore>,
    remote: Arc<dyn RemoteStore>,
    generator: Arc<dyn RecipeGenerator>,
    user_code: String,
}

impl RecipeUsecase {
    pub fn new(
        local: Arc<dyn LocalStore>,
        remote: Arc<dyn RemoteStore>,
        generator: Arc<dyn RecipeGenerator>,
        user_code: impl Into<String>,
    ) -> Self {
        Self {
            local,
            remote,
            generator,
            user_code: user_code.into(),
        }
    }

    /// Builds a generation request for `dish`, steering with the saved
    /// profile and the ingredients on hand.
    pub fn build_request(&self, dish: impl Into<String>, have: impl Into<String>) -> RecipeRequest {
        let profile = self.local.profile();
        RecipeRequest {
            dish: dish.into(),
            diet: profile.diet,
            avoid: profile.allergies,
            have: have.into(),
        }
    }

    /// Generates a recipe and persists it best-effort on both sides.
    ///
    /// The title is the first non-empty line of the response, trimmed and
    /// truncated to 120 characters; the content is the full trimmed
    /// response. The local write dedupes by title; the remote write is
    /// skipped when the remote already has the title. There is no rollback
    /// when one side succeeds and the other fails.
    ///
    /// # Returns
    ///
    /// The full generated text, regardless of persistence outcome. Only a
    /// generation failure surfaces as an error.
    pub async fn generate(&self, request: &RecipeRequest) -> Result<String> {
        let response = self.generator.generate(request).await?;

        let title = sanitize_title(&response);
        let content = response.trim().to_string();

        if !self.local.add_recipe(&title, &content) {
            tracing::debug!(title = %title, "recipe not added locally (duplicate or write failure)");
        }

        if self.remote.recipe_exists(&self.user_code, &title).await {
            tracing::debug!(title = %title, "recipe already stored remotely, skipping insert");
        } else {
            let recipe = Recipe::new(&title, &content);
            if !self.remote.insert_recipe(&self.user_code, &recipe).await {
                tracing::debug!(title = %title, "remote insert not confirmed");
            }
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{InMemoryRemoteStore, StaticGenerator};
    use ladle_infrastructure::JsonLocalStore;
    use tempfile::TempDir;

    const RESPONSE: &str = "Tomato Soup\nA cozy soup.\n\nIngredients:\n- tomatoes\n\nInstructions:\n1. simmer\n\nEstimated Time: 20 minutes\nDifficulty: 2";

    fn usecase(
        temp_dir: &TempDir,
        remote: Arc<InMemoryRemoteStore>,
        response: &str,
    ) -> (Arc<JsonLocalStore>, RecipeUsecase) {
        let local = Arc::new(JsonLocalStore::with_path(
            temp_dir.path().join("local_data.json"),
        ));
        let generator = Arc::new(StaticGenerator::new(response));
        let usecase = RecipeUsecase::new(local.clone(), remote, generator, "1234");
        (local, usecase)
    }

    #[tokio::test]
    async fn test_generate_returns_content_and_persists_both_sides() {
        let temp_dir = TempDir::new().unwrap();
        let remote = Arc::new(InMemoryRemoteStore::default());
        let (local, usecase) = usecase(&temp_dir, remote.clone(), RESPONSE);

        let request = usecase.build_request("tomato soup", "tomatoes");
        let content = usecase.generate(&request).await.unwrap();

        assert_eq!(content, RESPONSE.trim());
        assert_eq!(local.recipes()[0].title, "Tomato Soup");
        assert_eq!(remote.recipes("1234")[0].title, "Tomato Soup");
    }

    #[tokio::test]
    async fn test_title_is_first_line_truncated_to_120_chars() {
        let temp_dir = TempDir::new().unwrap();
        let long_line = "x".repeat(200);
        let response = format!("{}\nrest of recipe", long_line);
        let remote = Arc::new(InMemoryRemoteStore::default());
        let (local, usecase) = usecase(&temp_dir, remote, &response);

        usecase
            .generate(&RecipeRequest::default())
            .await
            .unwrap();

        let title = &local.recipes()[0].title;
        assert_eq!(title.len(), 120);
        assert_eq!(*title, long_line[..120]);
    }

    #[tokio::test]
    async fn test_duplicate_generation_is_silently_suppressed() {
        let temp_dir = TempDir::new().unwrap();
        let remote = Arc::new(InMemoryRemoteStore::default());
        let (local, usecase) = usecase(&temp_dir, remote.clone(), RESPONSE);

        let request = RecipeRequest::default();
        usecase.generate(&request).await.unwrap();
        // Second run still succeeds, with no new records anywhere
        let content = usecase.generate(&request).await.unwrap();

        assert_eq!(content, RESPONSE.trim());
        assert_eq!(local.recipes().len(), 1);
        assert_eq!(remote.recipes("1234").len(), 1);
    }

    #[tokio::test]
    async fn test_remote_outage_does_not_block_local_save() {
        let temp_dir = TempDir::new().unwrap();
        let remote = Arc::new(InMemoryRemoteStore::default());
        remote.set_unreachable(true);
        let (local, usecase) = usecase(&temp_dir, remote, RESPONSE);

        let content = usecase.generate(&RecipeRequest::default()).await.unwrap();

        assert_eq!(content, RESPONSE.trim());
        assert_eq!(local.recipes().len(), 1);
    }

    #[tokio::test]
    async fn test_generation_failure_surfaces_and_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let remote = Arc::new(InMemoryRemoteStore::default());
        let local = Arc::new(JsonLocalStore::with_path(
            temp_dir.path().join("local_data.json"),
        ));
        let generator = Arc::new(StaticGenerator::failing("model melted"));
        let usecase = RecipeUsecase::new(local.clone(), remote.clone(), generator, "1234");

        let err = usecase
            .generate(&RecipeRequest::default())
            .await
            .unwrap_err();

        assert!(err.is_generation());
        assert!(local.recipes().is_empty());
        assert!(remote.recipes("1234").is_empty());
    }

    #[tokio::test]
    async fn test_build_request_uses_saved_profile() {
        let temp_dir = TempDir::new().unwrap();
        let remote = Arc::new(InMemoryRemoteStore::default());
        let (local, usecase) = usecase(&temp_dir, remote, RESPONSE);
        local.set_profile("vegan", "peanuts");

        let request = usecase.build_request("pho", "rice noodles");
        assert_eq!(request.diet, "vegan");
        assert_eq!(request.avoid, "peanuts");
        assert_eq!(request.have, "rice noodles");
    }
}
