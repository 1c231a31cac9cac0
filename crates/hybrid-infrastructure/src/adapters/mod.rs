//! Host Boundary Adapters
//!
//! Implementations of the domain ports that reach outside the process.
//!
//! | Adapter | Port |
//! |---------|------|
//! | [`HeadlessHostInterop`] | `HostInterop` for hosts without a script engine |
//! | [`TimeoutHostInterop`] | `HostInterop` decorator enforcing a deadline |
//! | [`ReqwestHttpClient`] | `HttpClient` bound to a base address |

pub mod http;
pub mod interop;

pub use http::ReqwestHttpClient;
pub use interop::{HeadlessHostInterop, InteropCall, TimeoutHostInterop};
