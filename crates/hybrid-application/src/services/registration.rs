//! Composition root of the client service graph

use super::{MyFirstService, MySecondService};
use hybrid_domain::error::Result;
use hybrid_domain::ports::{FirstService, SecondService};
use hybrid_infrastructure::di::ServiceCollection;
use std::sync::Arc;
use tracing::debug;

/// Register the client services as singletons
///
/// `FirstService` receives the resolved `SecondService` through its
/// constructor. Must run once, before anything resolves a service.
pub fn register_client_services(services: &mut ServiceCollection) -> Result<&mut ServiceCollection> {
    services
        .add_singleton::<dyn FirstService, _>(|r| {
            let second = r.resolve::<dyn SecondService>()?;
            Ok(Arc::new(MyFirstService::new(second)))
        })?
        .add_singleton::<dyn SecondService, _>(|_| Ok(Arc::new(MySecondService::new())))?;

    debug!(services = services.len(), "Client services registered");
    Ok(services)
}
