//! Component contracts

use super::render_tree::RenderTree;
use async_trait::async_trait;
use hybrid_domain::error::Result;
use hybrid_domain::value_objects::{PageType, RouteParams};
use hybrid_infrastructure::di::ServiceScope;
use std::fmt;

/// A user interaction dispatched to the active components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiAction {
    name: String,
}

impl UiAction {
    /// Create an action named `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Action name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UiAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A renderable unit of UI
///
/// A render pass may suspend (for example on an HTTP request); the host keeps
/// processing events meanwhile.
#[async_trait]
pub trait Component: Send + Sync {
    /// Append this component's output to `tree`
    async fn render(&self, tree: &mut RenderTree) -> Result<()>;

    /// React to `action`; returns whether the action was handled
    async fn handle_event(&self, _action: &UiAction) -> Result<bool> {
        Ok(false)
    }
}

/// A routable component
///
/// Pages receive their collaborators as constructor arguments resolved from
/// the scope they are activated in.
pub trait Page: Component + Sized + 'static {
    /// Display name of the page
    const PAGE_NAME: &'static str;

    /// Construct the page for a route match
    fn activate(scope: &ServiceScope, params: &RouteParams) -> Result<Self>;

    /// Identity of this page type
    fn page_type() -> PageType {
        PageType::of::<Self>(Self::PAGE_NAME)
    }
}
