//! Service depending on [`SecondService`]

use hybrid_domain::ports::{FirstService, SecondService};
use std::sync::Arc;

/// Service constructed from its injected [`SecondService`]
pub struct MyFirstService {
    second: Arc<dyn SecondService>,
}

impl MyFirstService {
    /// Create the service with its dependency
    pub fn new(second: Arc<dyn SecondService>) -> Self {
        Self { second }
    }
}

impl FirstService for MyFirstService {
    fn name(&self) -> &'static str {
        "MyFirstService"
    }

    fn second(&self) -> Arc<dyn SecondService> {
        Arc::clone(&self.second)
    }
}

impl std::fmt::Debug for MyFirstService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MyFirstService")
            .field("second", &self.second.name())
            .finish()
    }
}
