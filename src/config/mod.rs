//! TOML configuration: file loading, validation, and shared storage.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{ApiConfig, Config, UiConfig};
