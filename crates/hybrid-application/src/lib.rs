//! Application Layer - Hybrid Shell
//!
//! The composition and routing core of a single-page client application:
//! a persistent shell that owns the identity of the current page, a route
//! view that pushes the matched page type into the shell before rendering
//! the page, and the service graph that supplies components with their
//! collaborators.
//!
//! ## Architecture
//!
//! ```text
//! UiEvent::Navigate ─► Router ─► watch<Option<RouteMatch>>
//!                                      │ (latest match, read at render time)
//!                                      ▼
//!                ObservedRouteView ── set_current_page ──► AppShell (ShellState)
//!                      │                                      │
//!                      ▼                                      ▼
//!              DefaultRouteRenderer ──► Page::activate   chrome, HeadOutlet
//!                                          │
//!                                          ▼
//!                                   ServiceScope (registry)
//! ```
//!
//! ## Modules
//!
//! - [`services`]: the client service graph and its registration
//! - [`routing`]: route templates, the route table and the router
//! - [`components`]: render tree, component traits, shell, route view, pages
//! - [`host`]: host builder (composition entry point) and the event loop

pub mod components;
pub mod host;
pub mod routing;
pub mod services;

pub use components::{AppShell, Component, Page, PageObserver, RenderTree, UiAction};
pub use host::{Host, HostBuilder, RenderedFrame, UiEvent};
pub use routing::{RouteTable, Router};
pub use services::register_client_services;
