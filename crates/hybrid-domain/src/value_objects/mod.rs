//! Domain Value Objects
//!
//! Immutable values that describe what is being rendered and how services live.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`PageType`] | Identity of a routable page component type |
//! | [`RouteMatch`] | Result of matching a path against the route table |
//! | [`RouteParams`] | Named parameters captured from a route template |
//! | [`ServiceLifetime`] | Lifetime policy of a registered service |

/// Service lifetime policies
pub mod lifetime;
/// Page component identity
pub mod page;
/// Route matching results
pub mod route;

pub use lifetime::ServiceLifetime;
pub use page::PageType;
pub use route::{RouteMatch, RouteParams};
