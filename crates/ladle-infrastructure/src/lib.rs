pub mod config_service;
pub mod local_store;
pub mod paths;
pub mod remote_store;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::local_store::JsonLocalStore;
pub use crate::remote_store::SupabaseStore;
