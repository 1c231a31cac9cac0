//! # Hybrid Shell
//!
//! Composition and routing core of a single-page client application.
//!
//! This crate is the public facade over the layered workspace and hosts the
//! `hybrid` binary.
//!
//! ## Example
//!
//! ```no_run
//! use hybrid::application::{HostBuilder, UiEvent};
//! use hybrid::infrastructure::config::ConfigLoader;
//! use tokio::sync::mpsc;
//!
//! # async fn example() -> hybrid::domain::Result<()> {
//! let config = ConfigLoader::new().load()?;
//! let host = HostBuilder::create_default(config).build()?;
//!
//! let (events, inbox) = mpsc::channel(16);
//! let (frames, mut outbox) = mpsc::unbounded_channel();
//! events.send(UiEvent::Navigate("/".to_string())).await.ok();
//! drop(events);
//!
//! host.run(inbox, frames).await?;
//! while let Some(frame) = outbox.recv().await {
//!     println!("{:?}", frame.page);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - error taxonomy, value objects and ports
//! - `infrastructure` - service registry, configuration, logging, host adapters
//! - `application` - services, routing, components and the host event loop

pub mod cli;

/// Domain layer - error taxonomy, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use hybrid_domain::*;
}

/// Infrastructure layer - service registry, configuration and adapters
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use hybrid_infrastructure::*;
}

/// Application layer - routing, components and the host
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use hybrid_application::*;
}

pub use hybrid_application::{Host, HostBuilder, RenderedFrame, UiEvent};
pub use hybrid_domain::{Error, Result};
