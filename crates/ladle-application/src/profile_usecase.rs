//! Profile use case.
//!
//! Reads go through the local store (the reconciler has already pulled the
//! remote profile when appropriate); saves write locally and push to the
//! remote in the same action. The push is best-effort: a failed upsert is
//! reported but never blocks the local save.

use ladle_core::profile::UserProfile;
use ladle_core::store::{LocalStore, RemoteStore};
use std::sync::Arc;

/// Use case for displaying and saving the dietary profile.
pub struct ProfileUsecase {
    local: Arc<dyn LocalStore>,
    remote: Arc<dyn RemoteStore>,
    user_code: String,
}

impl ProfileUsecase {
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

    /// Returns the current profile from the local store.
    pub fn profile(&self) -> UserProfile {
        self.local.profile()
    }

    /// Saves the profile locally and pushes it to the remote store.
    ///
    /// # Returns
    ///
    /// `true` when the remote upsert was confirmed; the local save happens
    /// either way.
    pub async fn save(&self, diet: &str, allergies: &str) -> bool {
        self.local.set_profile(diet, allergies);

        let profile = UserProfile::new(diet, allergies);
        let pushed = self.remote.upsert_profile(&self.user_code, &profile).await;
        if !pushed {
            tracing::warn!("profile saved locally but remote upsert was not confirmed");
        }
        pushed
    }
}
