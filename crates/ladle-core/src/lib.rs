pub mod config;
pub mod context;
pub mod document;
pub mod error;
pub mod generator;
pub mod profile;
pub mod recipe;
pub mod store;

// Re-export common error type
pub use error::LadleError;

pub use context::AppContext;
pub use document::LocalDocument;
pub use generator::{RecipeGenerator, RecipeRequest};
pub use profile::UserProfile;
pub use recipe::Recipe;
pub use store::{LocalStore, RemoteStore};
