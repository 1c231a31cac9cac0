//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//!
//! ## Module Categories
//!
//! ### Configuration & DI
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered TOML/environment configuration (figment) |
//! | [`di`] | Service registry: descriptors, lifetimes, scopes |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Host Boundaries
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Host interop bridge and HTTP client adapters |

pub mod adapters;
pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use error_ext::ErrorContext;
