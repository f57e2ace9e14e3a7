//! Recipe domain module.

mod model;
pub mod title;

pub use model::Recipe;
pub use title::{MAX_TITLE_CHARS, normalized_title, sanitize_title};
