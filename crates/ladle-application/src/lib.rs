pub mod profile_usecase;
pub mod recipe_usecase;
pub mod sync_service;

#[cfg(test)]
mod test_support;

pub use profile_usecase::ProfileUsecase;
pub use recipe_usecase::RecipeUsecase;
pub use sync_service::{PullOutcome, SyncService};
