//! Service descriptors
//!
//! A descriptor binds one [`ServiceKey`] to a factory and a lifetime. It is
//! created while configuring the registry and is immutable afterwards.

use super::key::ServiceKey;
use super::resolver::Resolver;
use hybrid_domain::error::{Error, Result};
use hybrid_domain::value_objects::ServiceLifetime;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A realized service, type-erased; always holds an `Arc<T>` for its key's `T`
pub(crate) type Instance = Arc<dyn Any + Send + Sync>;

type Factory = Arc<dyn Fn(&Resolver<'_>) -> Result<Instance> + Send + Sync>;

/// Binding of a service identity to its factory and lifetime
#[derive(Clone)]
pub struct ServiceDescriptor {
    key: ServiceKey,
    lifetime: ServiceLifetime,
    factory: Factory,
}

impl ServiceDescriptor {
    /// Descriptor for `T` built by `factory`
    pub fn new<T, F>(lifetime: ServiceLifetime, factory: F) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Resolver<'_>) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        Self {
            key: ServiceKey::of::<T>(),
            lifetime,
            factory: Arc::new(move |resolver| {
                factory(resolver).map(|service| Arc::new(service) as Instance)
            }),
        }
    }

    /// Singleton descriptor for `T`
    pub fn singleton<T, F>(factory: F) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Resolver<'_>) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        Self::new(ServiceLifetime::Singleton, factory)
    }

    /// Scoped descriptor for `T`
    pub fn scoped<T, F>(factory: F) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Resolver<'_>) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        Self::new(ServiceLifetime::Scoped, factory)
    }

    /// Transient descriptor for `T`
    pub fn transient<T, F>(factory: F) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Resolver<'_>) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        Self::new(ServiceLifetime::Transient, factory)
    }

    /// Singleton descriptor for an already constructed instance
    pub fn instance<T>(instance: Arc<T>) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        Self::singleton(move |_| Ok(Arc::clone(&instance)))
    }

    /// The service identity
    pub fn key(&self) -> ServiceKey {
        self.key
    }

    /// The lifetime policy
    pub fn lifetime(&self) -> ServiceLifetime {
        self.lifetime
    }

    pub(crate) fn create(&self, resolver: &Resolver<'_>) -> Result<Instance> {
        (self.factory)(resolver)
    }
}

impl fmt::Debug for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceDescriptor")
            .field("key", &self.key)
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}

/// Recover the typed service from a type-erased instance
pub(crate) fn downcast<T: ?Sized + Send + Sync + 'static>(
    key: ServiceKey,
    instance: &Instance,
) -> Result<Arc<T>> {
    (**instance)
        .downcast_ref::<Arc<T>>()
        .cloned()
        .ok_or_else(|| Error::internal(format!("Instance registered for {key} has another type")))
}
