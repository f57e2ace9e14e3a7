//! Test doubles shared by the use-case tests.

use ladle_core::error::{LadleError, Result};
use ladle_core::generator::{RecipeGenerator, RecipeRequest};
use ladle_core::profile::UserProfile;
use ladle_core::recipe::Recipe;
use ladle_core::store::RemoteStore;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory [`RemoteStore`] double.
///
/// Rows live in per-user-code maps; flipping `unreachable` makes every call
/// take the fail-open path, mimicking a network outage or policy denial.
#[derive(Default)]
pub struct InMemoryRemoteStore {
    profiles: Mutex<HashMap<String, UserProfile>>,
    recipes: Mutex<HashMap<String, Vec<Recipe>>>,
    unreachable: AtomicBool,
}

impl InMemoryRemoteStore {
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    fn is_unreachable(&self) -> bool {
        self.unreachable.load(Ordering::SeqCst)
    }

    pub fn put_profile(&self, user_code: &str, profile: UserProfile) {
        self.profiles
            .lock()
            .unwrap()
            .insert(user_code.to_string(), profile);
    }

    pub fn put_recipe(&self, user_code: &str, recipe: Recipe) {
        self.recipes
            .lock()
            .unwrap()
            .entry(user_code.to_string())
            .or_default()
            .push(recipe);
    }

    pub fn profile(&self, user_code: &str) -> Option<UserProfile> {
        self.profiles.lock().unwrap().get(user_code).cloned()
    }

    pub fn recipes(&self, user_code: &str) -> Vec<Recipe> {
        self.recipes
            .lock()
            .unwrap()
            .get(user_code)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl RemoteStore for InMemoryRemoteStore {
    async fn fetch_profile(&self, user_code: &str) -> Option<UserProfile> {
        if self.is_unreachable() {
            return None;
        }
        self.profile(user_code)
    }

    async fn upsert_profile(&self, user_code: &str, profile: &UserProfile) -> bool {
        if self.is_unreachable() {
            return false;
        }
        self.put_profile(user_code, profile.clone());
        true
    }

    async fn recipe_exists(&self, user_code: &str, title: &str) -> bool {
        if self.is_unreachable() {
            return false;
        }
        self.recipes(user_code).iter().any(|r| r.title == title)
    }

    async fn insert_recipe(&self, user_code: &str, recipe: &Recipe) -> bool {
        if self.is_unreachable() {
            return false;
        }
        self.put_recipe(user_code, recipe.clone());
        true
    }

    async fn list_recipes(&self, user_code: &str) -> Vec<Recipe> {
        if self.is_unreachable() {
            return Vec::new();
        }
        let mut recipes = self.recipes(user_code);
        recipes.reverse(); // newest first, like the real store
        recipes
    }
}

/// [`RecipeGenerator`] double returning a canned response or a canned error.
pub struct StaticGenerator {
    response: Result<String>,
}

impl StaticGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: Ok(response.into()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(LadleError::generation(message)),
        }
    }
}

#[async_trait::async_trait]
impl RecipeGenerator for StaticGenerator {
    async fn generate(&self, _request: &RecipeRequest) -> Result<String> {
        self.response.clone()
    }
}
