//! Command implementations and shared service wiring.

pub mod generate;
pub mod profile;
pub mod recipes;
pub mod sync;

use anyhow::{Context, Result};
use ladle_application::{ProfileUsecase, SyncService};
use ladle_core::AppContext;
use ladle_core::store::{LocalStore, RemoteStore};
use ladle_infrastructure::{ConfigService, JsonLocalStore, SupabaseStore};
use std::sync::Arc;

/// Services shared by every command.
///
/// The generator is not built here: only `generate` needs an API key, and
/// the other commands must keep working without one.
pub struct Services {
    pub context: AppContext,
    pub local: Arc<dyn LocalStore>,
    pub remote: Arc<dyn RemoteStore>,
    pub sync: SyncService,
    pub profile: ProfileUsecase,
    pub model_override: Option<String>,
}

impl Services {
    pub fn init() -> Result<Self> {
        let config = ConfigService::new().get_config();
        let context = AppContext::resolve(config.user_code.clone());

        let local: Arc<dyn LocalStore> = Arc::new(match config.data_file {
            Some(path) => JsonLocalStore::with_path(path),
            None => JsonLocalStore::new().context("could not resolve local data path")?,
        });
        let remote: Arc<dyn RemoteStore> = Arc::new(SupabaseStore::from_secrets());

        let sync = SyncService::new(local.clone(), remote.clone(), &context.user_code);
        let profile = ProfileUsecase::new(local.clone(), remote.clone(), &context.user_code);

        Ok(Self {
            context,
            local,
            remote,
            sync,
            profile,
            model_override: config.model,
        })
    }
}
