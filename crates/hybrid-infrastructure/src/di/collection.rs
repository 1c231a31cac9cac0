//! Service registration

use super::descriptor::ServiceDescriptor;
use super::key::ServiceKey;
use super::provider::{ProviderOptions, ServiceProvider};
use super::resolver::Resolver;
use hybrid_domain::error::{Error, Result};
use std::sync::Arc;
use tracing::{debug, warn};

/// Mutable list of service descriptors, filled once at startup
///
/// Registration methods return `&mut Self` so bindings can be chained with `?`:
///
/// ```
/// use hybrid_infrastructure::di::ServiceCollection;
/// use std::sync::Arc;
///
/// # fn main() -> hybrid_domain::Result<()> {
/// let mut services = ServiceCollection::new();
/// services
///     .add_singleton::<u32, _>(|_| Ok(Arc::new(1)))?
///     .add_transient::<String, _>(|r| Ok(Arc::new(r.resolve::<u32>()?.to_string())))?;
/// assert_eq!(services.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ServiceCollection {
    descriptors: Vec<ServiceDescriptor>,
}

impl ServiceCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor; fails if its identity is already bound
    pub fn register(&mut self, descriptor: ServiceDescriptor) -> Result<&mut Self> {
        let key = descriptor.key();
        if self.contains_key(key) {
            warn!(service = %key, "Duplicate service registration rejected");
            return Err(Error::duplicate_registration(key.name()));
        }
        debug!(service = %key, lifetime = %descriptor.lifetime(), "Service registered");
        self.descriptors.push(descriptor);
        Ok(self)
    }

    /// Register `T` with singleton lifetime
    pub fn add_singleton<T, F>(&mut self, factory: F) -> Result<&mut Self>
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Resolver<'_>) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        self.register(ServiceDescriptor::singleton(factory))
    }

    /// Register `T` with scoped lifetime
    pub fn add_scoped<T, F>(&mut self, factory: F) -> Result<&mut Self>
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Resolver<'_>) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        self.register(ServiceDescriptor::scoped(factory))
    }

    /// Register `T` with transient lifetime
    pub fn add_transient<T, F>(&mut self, factory: F) -> Result<&mut Self>
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Resolver<'_>) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        self.register(ServiceDescriptor::transient(factory))
    }

    /// Register an already constructed singleton
    pub fn add_instance<T>(&mut self, instance: Arc<T>) -> Result<&mut Self>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.register(ServiceDescriptor::instance(instance))
    }

    /// Whether `T` is already bound
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.contains_key(ServiceKey::of::<T>())
    }

    /// Whether `key` is already bound
    pub fn contains_key(&self, key: ServiceKey) -> bool {
        self.descriptors.iter().any(|d| d.key() == key)
    }

    /// Registered descriptors in registration order
    pub fn descriptors(&self) -> &[ServiceDescriptor] {
        &self.descriptors
    }

    /// Number of registrations
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Freeze the registrations into a provider
    pub fn build(self, options: ProviderOptions) -> Result<ServiceProvider> {
        ServiceProvider::from_descriptors(self.descriptors, options)
    }
}
