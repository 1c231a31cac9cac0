//! Routing Subsystem
//!
//! Maps navigation paths to page component types.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`RouteTemplate`] | Parsed path pattern (`/`, literals, `{name}`, trailing `{*rest}`) |
//! | [`RouteTable`] | Ordered template to page bindings; first match wins |
//! | [`Router`] | Resolves navigations and publishes the latest match |

pub mod router;
pub mod table;
pub mod template;

pub use router::Router;
pub use table::{PageActivator, RouteBinding, RouteTable, RouteTableBuilder};
pub use template::{RouteTemplate, strip_query};
