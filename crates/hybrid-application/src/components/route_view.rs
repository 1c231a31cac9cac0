//! Route view
//!
//! [`DefaultRouteRenderer`] performs the plain "route matched, construct and
//! render the page" step. [`ObservedRouteView`] decorates any
//! [`RouteRenderer`]: on each render it reads the latest route match, hands
//! the page type to its [`PageObserver`] and only then delegates.

use super::component::{Component, UiAction};
use super::render_tree::RenderTree;
use super::shell::PageObserver;
use crate::routing::RouteTable;
use async_trait::async_trait;
use hybrid_domain::error::{Error, Result};
use hybrid_domain::value_objects::RouteMatch;
use hybrid_infrastructure::di::ServiceScope;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;
use tracing::debug;

/// The match to render step
#[async_trait]
pub trait RouteRenderer: Send + Sync {
    /// Render the page for `route` into `tree`
    async fn render_route(&self, route: &RouteMatch, tree: &mut RenderTree) -> Result<()>;

    /// Forward `action` to the page currently rendered
    async fn handle_event(&self, _action: &UiAction) -> Result<bool> {
        Ok(false)
    }
}

struct ActivePage {
    route: RouteMatch,
    component: Arc<dyn Component>,
}

/// Activates pages from the route table and renders them
///
/// The page instance is kept while consecutive renders target the same
/// match, so page state survives re-renders triggered by actions.
pub struct DefaultRouteRenderer {
    routes: Arc<RouteTable>,
    scope: Arc<ServiceScope>,
    active: Mutex<Option<ActivePage>>,
}

impl DefaultRouteRenderer {
    /// Create a renderer activating pages in `scope`
    pub fn new(routes: Arc<RouteTable>, scope: Arc<ServiceScope>) -> Self {
        Self {
            routes,
            scope,
            active: Mutex::new(None),
        }
    }

    /// The page currently rendered, if any
    pub fn active_page(&self) -> Option<Arc<dyn Component>> {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|active| Arc::clone(&active.component))
    }

    fn page_for(&self, route: &RouteMatch) -> Result<Arc<dyn Component>> {
        let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(page) = active.as_ref().filter(|page| page.route == *route) {
            return Ok(Arc::clone(&page.component));
        }

        let component = self.routes.activate(route, &self.scope)?;
        *active = Some(ActivePage {
            route: route.clone(),
            component: Arc::clone(&component),
        });
        Ok(component)
    }
}

#[async_trait]
impl RouteRenderer for DefaultRouteRenderer {
    async fn render_route(&self, route: &RouteMatch, tree: &mut RenderTree) -> Result<()> {
        let page = self.page_for(route)?;
        page.render(tree).await
    }

    async fn handle_event(&self, action: &UiAction) -> Result<bool> {
        match self.active_page() {
            Some(page) => page.handle_event(action).await,
            None => Ok(false),
        }
    }
}

/// Route view that reports the matched page type before rendering it
///
/// The match is read when the render starts, never captured earlier, so a
/// render started after a newer navigation reports the newer page.
pub struct ObservedRouteView {
    observer: Arc<dyn PageObserver>,
    current: watch::Receiver<Option<RouteMatch>>,
    inner: Arc<dyn RouteRenderer>,
}

impl ObservedRouteView {
    /// Start building a view around `inner`
    pub fn builder(inner: Arc<dyn RouteRenderer>) -> RouteViewBuilder {
        RouteViewBuilder {
            inner,
            observer: None,
            current: None,
        }
    }

    /// The route match the next render will use
    pub fn latest(&self) -> Option<RouteMatch> {
        self.current.borrow().clone()
    }
}

#[async_trait]
impl Component for ObservedRouteView {
    async fn render(&self, tree: &mut RenderTree) -> Result<()> {
        let route = self.latest();
        let page = route.as_ref().map(|route| route.page_type);
        self.observer.set_current_page(page);
        debug!(page = ?page, "Current page updated");

        match route {
            Some(route) => self.inner.render_route(&route, tree).await,
            None => Ok(()),
        }
    }

    async fn handle_event(&self, action: &UiAction) -> Result<bool> {
        self.inner.handle_event(action).await
    }
}

/// Builder for [`ObservedRouteView`]
///
/// Both the observer and the source of route matches are required.
pub struct RouteViewBuilder {
    inner: Arc<dyn RouteRenderer>,
    observer: Option<Arc<dyn PageObserver>>,
    current: Option<watch::Receiver<Option<RouteMatch>>>,
}

impl RouteViewBuilder {
    /// Set the observer notified of every rendered page type
    pub fn observer(mut self, observer: Arc<dyn PageObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Set the source of the latest route match
    pub fn current(mut self, current: watch::Receiver<Option<RouteMatch>>) -> Self {
        self.current = Some(current);
        self
    }

    /// Build the view
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the observer or the route source is missing.
    pub fn build(self) -> Result<ObservedRouteView> {
        let observer = self.observer.ok_or_else(|| {
            Error::configuration("Route view requires an observer for the current page")
        })?;
        let current = self.current.ok_or_else(|| {
            Error::configuration("Route view requires a source of route matches")
        })?;

        Ok(ObservedRouteView {
            observer,
            current,
            inner: self.inner,
        })
    }
}
