//! Store trait seams.
//!
//! Defines the interfaces for the two persistence backends, decoupling the
//! application's core logic from the specific storage mechanism (a JSON file
//! on disk, a remote table-oriented API).

use crate::document::LocalDocument;
use crate::profile::UserProfile;
use crate::recipe::Recipe;

/// The durable local cache: one JSON document on disk.
///
/// Authoritative whenever the remote store is unavailable. Nothing in this
/// trait returns an error: a missing or corrupt backing file degrades to the
/// default document (data loss is accepted over crash), and a failed write is
/// logged and reported through the return value where one exists.
///
/// Every mutation is a full load-modify-save of the whole document. Calls are
/// atomic from the caller's perspective, but two interleaved callers from
/// independent execution contexts would be last-write-wins at whole-document
/// granularity; the system is single-user, single-process.
pub trait LocalStore: Send + Sync {
    /// Reads the backing file, substituting the default document on any
    /// missing-file or parse failure.
    fn load(&self) -> LocalDocument;

    /// Serializes and rewrites the whole document.
    fn save(&self, doc: &LocalDocument) -> crate::error::Result<()>;

    /// Appends a recipe unless a case-insensitive trimmed-title duplicate
    /// already exists.
    ///
    /// This is the sole write path for locally created recipes; the duplicate
    /// check runs on every call against the freshly loaded document.
    ///
    /// # Returns
    ///
    /// `true` if the recipe was appended and persisted, `false` if it was a
    /// duplicate (nothing written) or the write failed.
    fn add_recipe(&self, title: &str, content: &str) -> bool;

    /// Replaces the profile wholesale.
    fn set_profile(&self, diet: &str, allergies: &str);

    /// Returns the current profile (default on missing/corrupt file).
    fn profile(&self) -> UserProfile;

    /// Returns the saved recipes in insertion (chronological) order.
    fn recipes(&self) -> Vec<Recipe>;

    /// Replaces the whole recipe list in one write, preserving order.
    ///
    /// Used by the reconciler to persist a merged list; duplicate checking is
    /// the caller's responsibility on this path.
    fn replace_recipes(&self, recipes: Vec<Recipe>) -> crate::error::Result<()>;
}

/// The durable shared cache: a logical two-table service keyed by user code.
///
/// Authoritative whenever reachable. Every operation is fail-open: transport
/// failures, policy denials and "not found" all collapse into the same
/// "nothing there" return value (`None` / `false` / empty), so that a remote
/// outage can never block local operation. The distinction is deliberately
/// erased at this boundary; implementations log the failure before
/// swallowing it.
#[async_trait::async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetches the profile row for `user_code`.
    ///
    /// Returns `None` both when no row exists and when the call fails.
    async fn fetch_profile(&self, user_code: &str) -> Option<UserProfile>;

    /// Inserts or updates the profile row keyed by `user_code`.
    ///
    /// Returns `false` when no write was confirmed; never errors.
    async fn upsert_profile(&self, user_code: &str, profile: &UserProfile) -> bool;

    /// Exact-title existence check scoped to `user_code`.
    ///
    /// Returns `false` on any failure so a remote outage never blocks a
    /// local save.
    async fn recipe_exists(&self, user_code: &str, title: &str) -> bool;

    /// Inserts a recipe row.
    ///
    /// Callers must have confirmed via [`Self::recipe_exists`] that no
    /// duplicate exists; the store does not enforce uniqueness atomically.
    /// The check-then-act window between the two calls is an accepted
    /// limitation — the system has no concurrent-writer scenario.
    ///
    /// Returns `false` when no write was confirmed.
    async fn insert_recipe(&self, user_code: &str, recipe: &Recipe) -> bool;

    /// Lists all recipes for `user_code`, newest first.
    ///
    /// Returns an empty list on any failure.
    async fn list_recipes(&self, user_code: &str) -> Vec<Recipe>;
}
