//! Component Model
//!
//! | Component | Mount | Description |
//! |-----------|-------|-------------|
//! | [`ShellView`] | `#app` | Shell chrome around the route view |
//! | [`HeadOutlet`] | `head::after` | Document title for the current page |
//! | [`pages::Home`], [`pages::Counter`], [`pages::Weather`] | routed | Page bodies |

pub mod component;
pub mod head;
pub mod pages;
pub mod render_tree;
pub mod route_view;
pub mod shell;

pub use component::{Component, Page, UiAction};
pub use head::HeadOutlet;
pub use render_tree::{Element, RenderNode, RenderTree};
pub use route_view::{DefaultRouteRenderer, ObservedRouteView, RouteRenderer, RouteViewBuilder};
pub use shell::{AppShell, NavLink, PageObserver, ShellState, ShellView};
