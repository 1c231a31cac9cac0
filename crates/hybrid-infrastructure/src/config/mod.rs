//! Configuration
//!
//! Layered configuration: defaults, then a TOML file, then `HYBRID_*`
//! environment variables. See [`loader::ConfigLoader`].

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader, validate_app_config};
pub use types::*;
