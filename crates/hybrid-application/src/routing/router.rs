//! Navigation router

use super::table::RouteTable;
use hybrid_domain::error::Result;
use hybrid_domain::value_objects::RouteMatch;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Resolves navigations against a [`RouteTable`]
///
/// The latest match is published on a watch channel: `Some` after a
/// successful navigation, `None` after a miss. Readers always observe the
/// newest value, never one captured when an older navigation started.
pub struct Router {
    table: Arc<RouteTable>,
    current: watch::Sender<Option<RouteMatch>>,
}

impl Router {
    /// Create a router over `table`
    pub fn new(table: Arc<RouteTable>) -> Self {
        let (current, _) = watch::channel(None);
        Self { table, current }
    }

    /// The route table in use
    pub fn table(&self) -> &Arc<RouteTable> {
        &self.table
    }

    /// Resolve `path` and publish the result
    pub fn navigate(&self, path: &str) -> Result<RouteMatch> {
        match self.table.resolve(path) {
            Ok(route) => {
                debug!(path, page = %route.page_type, "Route matched");
                self.current.send_replace(Some(route.clone()));
                Ok(route)
            }
            Err(err) => {
                warn!(path, "No route matches navigation");
                self.current.send_replace(None);
                Err(err)
            }
        }
    }

    /// The latest published match
    pub fn current(&self) -> Option<RouteMatch> {
        self.current.borrow().clone()
    }

    /// Receiver of the latest match
    pub fn subscribe(&self) -> watch::Receiver<Option<RouteMatch>> {
        self.current.subscribe()
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.table.len())
            .field("current", &*self.current.borrow())
            .finish()
    }
}
