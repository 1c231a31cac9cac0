//! # Domain Layer
//!
//! Core types shared by every layer of the hybrid shell: the identity of page
//! components, the result of matching a route, service lifetimes, the error
//! taxonomy, and the ports through which components reach the host environment.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`value_objects`] | `PageType`, `RouteMatch`, `RouteParams`, `ServiceLifetime` |
//! | [`ports`] | Host interop, HTTP client and application service contracts |
//! | [`constants`] | Domain-level constants |
//!
//! This crate performs no I/O and has no knowledge of how services are wired.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{PageType, RouteMatch, RouteParams, ServiceLifetime};
