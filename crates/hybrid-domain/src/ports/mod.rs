//! Domain Port Interfaces
//!
//! Contracts for the collaborators a component may receive through the
//! service registry. Implementations live in the infrastructure and
//! application layers and are always injected as `Arc<dyn Trait>`.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`HostInterop`] | Invoke named functions in the host environment |
//! | [`HttpClient`] | HTTP client bound to a base address |
//! | [`FirstService`], [`SecondService`] | Application services of the client graph |

/// HTTP client boundary
pub mod http;
/// Host-interop boundary
pub mod interop;
/// Application service contracts
pub mod services;

pub use http::HttpClient;
pub use interop::HostInterop;
pub use services::{FirstService, SecondService};
