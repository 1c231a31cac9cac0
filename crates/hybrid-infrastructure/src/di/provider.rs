//! Service provider and scopes
//!
//! The [`ServiceProvider`] owns every singleton it materializes for as long
//! as it lives; nothing else may replace or drop those instances. A
//! [`ServiceScope`] owns the scoped instances created through it.
//!
//! Materialization of cached instances is serialized by one registry-wide
//! re-entrant lock. A cycle entered from two threads therefore runs on a
//! single resolution stack and fails as a cycle instead of deadlocking.

use super::descriptor::{Instance, ServiceDescriptor};
use super::key::ServiceKey;
use super::resolver::Resolver;
use crate::config::ContainerConfig;
use hybrid_domain::error::{Error, Result};
use hybrid_domain::value_objects::ServiceLifetime;
use parking_lot::ReentrantMutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use uuid::Uuid;

pub(crate) type Slot = Mutex<Option<Instance>>;
pub(crate) type SlotMap = HashMap<ServiceKey, Slot>;

/// Behaviour switches applied when building and using a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderOptions {
    /// Resolve every registration once while building
    pub validate_on_build: bool,
    /// Reject scoped services resolved from the root or captured by singletons
    pub validate_scopes: bool,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            validate_on_build: true,
            validate_scopes: true,
        }
    }
}

impl From<ContainerConfig> for ProviderOptions {
    fn from(config: ContainerConfig) -> Self {
        Self {
            validate_on_build: config.validate_on_build,
            validate_scopes: config.validate_scopes,
        }
    }
}

/// Immutable descriptor table plus the singleton cache
pub(crate) struct Registry {
    descriptors: HashMap<ServiceKey, ServiceDescriptor>,
    order: Vec<ServiceKey>,
    singletons: SlotMap,
    root_scoped: SlotMap,
    construction: ReentrantMutex<()>,
    options: ProviderOptions,
}

impl Registry {
    fn new(descriptors: Vec<ServiceDescriptor>, options: ProviderOptions) -> Self {
        let order: Vec<ServiceKey> = descriptors.iter().map(ServiceDescriptor::key).collect();
        let singletons = slots_for(&descriptors, ServiceLifetime::Singleton);
        let root_scoped = slots_for(&descriptors, ServiceLifetime::Scoped);
        let descriptors = descriptors
            .into_iter()
            .map(|descriptor| (descriptor.key(), descriptor))
            .collect();

        Self {
            descriptors,
            order,
            singletons,
            root_scoped,
            construction: ReentrantMutex::new(()),
            options,
        }
    }

    pub(crate) fn descriptor(&self, key: ServiceKey) -> Option<&ServiceDescriptor> {
        self.descriptors.get(&key)
    }

    pub(crate) fn singleton_slot(&self, key: ServiceKey) -> Result<&Slot> {
        self.singletons
            .get(&key)
            .ok_or_else(|| Error::internal(format!("No singleton slot allocated for {key}")))
    }

    /// Lock held by the thread materializing cached instances
    ///
    /// Re-entrant so a factory can resolve its own dependencies.
    pub(crate) fn construction(&self) -> &ReentrantMutex<()> {
        &self.construction
    }

    pub(crate) fn options(&self) -> ProviderOptions {
        self.options
    }

    fn scoped_slots(&self) -> SlotMap {
        self.root_scoped
            .keys()
            .map(|key| (*key, Mutex::new(None)))
            .collect()
    }
}

fn slots_for(descriptors: &[ServiceDescriptor], lifetime: ServiceLifetime) -> SlotMap {
    descriptors
        .iter()
        .filter(|descriptor| descriptor.lifetime() == lifetime)
        .map(|descriptor| (descriptor.key(), Mutex::new(None)))
        .collect()
}

fn materialized(slots: &SlotMap) -> usize {
    slots
        .values()
        .filter(|slot| slot.try_lock().map(|guard| guard.is_some()).unwrap_or(false))
        .count()
}

/// Root of the service registry
///
/// Cheap to clone; clones share the same descriptors and singleton cache.
#[derive(Clone)]
pub struct ServiceProvider {
    registry: Arc<Registry>,
}

impl ServiceProvider {
    pub(crate) fn from_descriptors(
        descriptors: Vec<ServiceDescriptor>,
        options: ProviderOptions,
    ) -> Result<Self> {
        let provider = Self {
            registry: Arc::new(Registry::new(descriptors, options)),
        };

        if options.validate_on_build {
            provider.validate()?;
        }

        info!(
            services = provider.service_count(),
            validated = options.validate_on_build,
            "Service provider built"
        );
        Ok(provider)
    }

    /// Resolve `T` from the root
    ///
    /// Singletons are constructed on first use and shared afterwards.
    pub fn resolve<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        self.root_resolver().resolve::<T>()
    }

    /// Resolve `T` from the root if it is registered
    pub fn try_resolve<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Option<Arc<T>>> {
        self.root_resolver().try_resolve::<T>()
    }

    /// Open a new scope with its own scoped instances
    pub fn create_scope(&self) -> ServiceScope {
        let scope = ServiceScope {
            id: Uuid::new_v4(),
            scoped: self.registry.scoped_slots(),
            provider: self.clone(),
        };
        debug!(scope = %scope.id, "Service scope created");
        scope
    }

    /// Whether `T` has a descriptor
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.registry.descriptor(ServiceKey::of::<T>()).is_some()
    }

    /// Lifetime registered for `T`
    pub fn lifetime_of<T: ?Sized + 'static>(&self) -> Option<ServiceLifetime> {
        self.registry
            .descriptor(ServiceKey::of::<T>())
            .map(ServiceDescriptor::lifetime)
    }

    /// Number of registered services
    pub fn service_count(&self) -> usize {
        self.registry.order.len()
    }

    /// Number of singletons materialized so far
    pub fn singleton_count(&self) -> usize {
        materialized(&self.registry.singletons)
    }

    /// Options the provider was built with
    pub fn options(&self) -> ProviderOptions {
        self.registry.options()
    }

    fn root_resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.registry, &self.registry.root_scoped, false)
    }

    /// Resolve every registration once, in registration order
    fn validate(&self) -> Result<()> {
        let scope = self.create_scope();
        for key in &self.registry.order {
            let lifetime = self.registry.descriptor(*key).map(ServiceDescriptor::lifetime);
            let result = match lifetime {
                Some(ServiceLifetime::Singleton) => self.root_resolver().resolve_key(*key),
                _ => scope.resolver().resolve_key(*key),
            };
            if let Err(err) = result {
                return Err(Error::configuration_with_source(
                    format!("Service {key} failed validation"),
                    err,
                ));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ServiceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceProvider")
            .field("services", &self.service_count())
            .field("singletons", &self.singleton_count())
            .field("options", &self.registry.options)
            .finish()
    }
}

/// A resolution scope
///
/// Scoped services resolve to one instance per scope; singletons still come
/// from the provider the scope was created from.
pub struct ServiceScope {
    id: Uuid,
    provider: ServiceProvider,
    scoped: SlotMap,
}

impl ServiceScope {
    /// Unique identifier of this scope
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The provider this scope belongs to
    pub fn provider(&self) -> &ServiceProvider {
        &self.provider
    }

    /// Resolve `T` within this scope
    pub fn resolve<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        self.resolver().resolve::<T>()
    }

    /// Resolve `T` within this scope if it is registered
    pub fn try_resolve<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Option<Arc<T>>> {
        self.resolver().try_resolve::<T>()
    }

    /// Number of scoped instances materialized in this scope
    pub fn scoped_count(&self) -> usize {
        materialized(&self.scoped)
    }

    pub(crate) fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.provider.registry, &self.scoped, true)
    }
}

impl fmt::Debug for ServiceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceScope")
            .field("id", &self.id)
            .field("scoped", &self.scoped_count())
            .finish()
    }
}
