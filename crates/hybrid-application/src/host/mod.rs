//! Host
//!
//! Composition entry point ([`HostBuilder`]) and the navigation event loop
//! ([`Host::run`]).

pub mod builder;
pub mod event_loop;

pub use builder::{HostBuilder, MountKind, MountPoint, register_host_services};
pub use event_loop::{Host, RenderedFrame, UiEvent};
