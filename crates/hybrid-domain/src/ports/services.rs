//! Application Service Contracts
//!
//! The client service graph: [`FirstService`] depends on [`SecondService`].
//! Both are registered as singletons by the composition root.

use std::sync::Arc;

/// Leaf service of the client graph
pub trait SecondService: Send + Sync {
    /// Diagnostic name of the implementation
    fn name(&self) -> &'static str;
}

/// Service constructed from a resolved [`SecondService`]
pub trait FirstService: Send + Sync {
    /// Diagnostic name of the implementation
    fn name(&self) -> &'static str;

    /// The dependency this service was constructed with
    fn second(&self) -> Arc<dyn SecondService>;
}
