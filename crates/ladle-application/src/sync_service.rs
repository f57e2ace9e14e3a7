//! Local/remote reconciliation.
//!
//! A one-directional pull merge: the remote store is authoritative for the
//! profile whenever reachable, and remote-only recipes are adopted locally
//! by title union. Nothing is ever pushed or deleted by this routine; push
//! happens only at creation time in the use cases.

use ladle_core::recipe::{Recipe, normalized_title};
use ladle_core::store::{LocalStore, RemoteStore};
use std::collections::HashSet;
use std::sync::Arc;

/// What a pull changed locally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PullOutcome {
    /// The remote profile was present and overwrote the local one.
    pub profile_updated: bool,
    /// Number of remote-only recipes appended locally.
    pub recipes_added: usize,
}

/// Pull reconciler between the local and remote stores.
///
/// Invoked at startup and before profile display. The merge is idempotent:
/// pulling twice against the same remote state leaves the local store exactly
/// as after the first pull.
pub struct SyncService {
    local: Arc<dyn LocalStore>,
    remote: Arc<dyn RemoteStore>,
    user_code: String,
}

impl SyncService {
    pub fn new(
        local: Arc<dyn LocalStore>,
        remote: Arc<dyn RemoteStore>,
        user_code: impl Into<String>,
    ) -> Self {
        Self {
            local,
            remote,
            user_code: user_code.into(),
        }
    }

    /// Pulls remote state into the local store.
    ///
    /// 1. Remote profile present → overwrite local profile wholesale;
    ///    absent → leave the local profile untouched (never wipe local data
    ///    with emptiness).
    /// 2. Union remote recipes into the local list by normalized title.
    ///    Local wins on a title collision: the existing entry keeps its
    ///    content and position. Remote recipes with empty titles are skipped.
    /// 3. One merged write iff anything was appended.
    pub async fn pull(&self) -> PullOutcome {
        let mut outcome = PullOutcome::default();

        if let Some(profile) = self.remote.fetch_profile(&self.user_code).await {
            self.local.set_profile(&profile.diet, &profile.allergies);
            outcome.profile_updated = true;
            tracing::debug!("remote profile pulled into local store");
        }

        let remote_recipes = self.remote.list_recipes(&self.user_code).await;
        if remote_recipes.is_empty() {
            return outcome;
        }

        let mut merged = self.local.recipes();
        let mut known_titles: HashSet<String> = merged
            .iter()
            .map(|recipe| normalized_title(&recipe.title))
            .collect();

        for remote in remote_recipes {
            let title = remote.title.trim();
            if title.is_empty() {
                continue;
            }
            let key = normalized_title(title);
            if known_titles.contains(&key) {
                continue;
            }
            known_titles.insert(key);
            merged.push(Recipe::new(title, remote.content));
            outcome.recipes_added += 1;
        }

        if outcome.recipes_added > 0 {
            if let Err(e) = self.local.replace_recipes(merged) {
                tracing::warn!(error = %e, "failed to persist merged recipe list");
                outcome.recipes_added = 0;
            } else {
                tracing::debug!(added = outcome.recipes_added, "adopted remote recipes locally");
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InMemoryRemoteStore;
    use ladle_core::profile::UserProfile;
    use ladle_infrastructure::JsonLocalStore;
    use tempfile::TempDir;

    fn local_store(temp_dir: &TempDir) -> Arc<JsonLocalStore> {
        Arc::new(JsonLocalStore::with_path(
            temp_dir.path().join("local_data.json"),
        ))
    }

    #[tokio::test]
    async fn test_pull_adopts_remote_only_recipe() {
        let temp_dir = TempDir::new().unwrap();
        let local = local_store(&temp_dir);
        let remote = Arc::new(InMemoryRemoteStore::default());
        remote.put_recipe("1234", Recipe::new("Tomato Soup", "..."));

        let sync = SyncService::new(local.clone(), remote, "1234");
        let outcome = sync.pull().await;

        assert_eq!(outcome.recipes_added, 1);
        let recipes = local.recipes();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Tomato Soup");
    }

    #[tokio::test]
    async fn test_local_wins_on_case_different_title_collision() {
        let temp_dir = TempDir::new().unwrap();
        let local = local_store(&temp_dir);
        local.add_recipe("Tomato Soup", "A");

        let remote = Arc::new(InMemoryRemoteStore::default());
        remote.put_recipe("1234", Recipe::new("tomato soup", "B"));

        let sync = SyncService::new(local.clone(), remote, "1234");
        let outcome = sync.pull().await;

        assert_eq!(outcome.recipes_added, 0);
        let recipes = local.recipes();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Tomato Soup");
        assert_eq!(recipes[0].content, "A");
    }

    #[tokio::test]
    async fn test_pull_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let local = local_store(&temp_dir);
        local.add_recipe("Dal", "local dal");

        let remote = Arc::new(InMemoryRemoteStore::default());
        remote.put_profile("1234", UserProfile::new("vegan", "nuts"));
        remote.put_recipe("1234", Recipe::new("Pho", "pho text"));

        let sync = SyncService::new(local.clone(), remote, "1234");
        sync.pull().await;
        let after_first = local.load();

        let outcome = sync.pull().await;
        assert_eq!(outcome.recipes_added, 0);
        assert_eq!(local.load(), after_first);
    }

    #[tokio::test]
    async fn test_absent_remote_profile_leaves_local_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let local = local_store(&temp_dir);
        local.set_profile("vegetarian", "shellfish");

        let remote = Arc::new(InMemoryRemoteStore::default());
        let sync = SyncService::new(local.clone(), remote, "1234");
        let outcome = sync.pull().await;

        assert!(!outcome.profile_updated);
        assert_eq!(local.profile(), UserProfile::new("vegetarian", "shellfish"));
    }

    #[tokio::test]
    async fn test_present_remote_profile_overwrites_local() {
        let temp_dir = TempDir::new().unwrap();
        let local = local_store(&temp_dir);
        local.set_profile("vegetarian", "shellfish");

        let remote = Arc::new(InMemoryRemoteStore::default());
        remote.put_profile("1234", UserProfile::new("vegan", ""));

        let sync = SyncService::new(local.clone(), remote, "1234");
        let outcome = sync.pull().await;

        assert!(outcome.profile_updated);
        assert_eq!(local.profile(), UserProfile::new("vegan", ""));
    }

    #[tokio::test]
    async fn test_pull_never_removes_local_only_recipes() {
        let temp_dir = TempDir::new().unwrap();
        let local = local_store(&temp_dir);
        local.add_recipe("Local Only", "keep me");

        let remote = Arc::new(InMemoryRemoteStore::default());
        remote.put_recipe("1234", Recipe::new("Remote Only", "adopt me"));

        let sync = SyncService::new(local.clone(), remote, "1234");
        sync.pull().await;

        let titles: Vec<String> = local.recipes().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Local Only", "Remote Only"]);
    }

    #[tokio::test]
    async fn test_empty_remote_titles_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let local = local_store(&temp_dir);

        let remote = Arc::new(InMemoryRemoteStore::default());
        remote.put_recipe("1234", Recipe::new("  ", "junk"));
        remote.put_recipe("1234", Recipe::new("Real", "keep"));

        let sync = SyncService::new(local.clone(), remote, "1234");
        let outcome = sync.pull().await;

        assert_eq!(outcome.recipes_added, 1);
        assert_eq!(local.recipes()[0].title, "Real");
    }

    #[tokio::test]
    async fn test_unreachable_remote_is_a_no_op() {
        let temp_dir = TempDir::new().unwrap();
        let local = local_store(&temp_dir);
        local.set_profile("vegan", "");
        local.add_recipe("Dal", "x");

        let remote = Arc::new(InMemoryRemoteStore::default());
        remote.put_profile("1234", UserProfile::new("carnivore", ""));
        remote.set_unreachable(true);

        let sync = SyncService::new(local.clone(), remote, "1234");
        let outcome = sync.pull().await;

        assert_eq!(outcome, PullOutcome::default());
        assert_eq!(local.profile().diet, "vegan");
        assert_eq!(local.recipes().len(), 1);
    }
}
