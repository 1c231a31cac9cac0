//! Resolution context
//!
//! A [`Resolver`] lives for one top-level resolution. It carries the stack of
//! identities currently under construction so that a nested request for one
//! of them is reported as a cycle before any recursion happens.

use super::descriptor::{Instance, ServiceDescriptor, downcast};
use super::key::ServiceKey;
use super::provider::{Registry, Slot, SlotMap};
use hybrid_domain::error::{Error, Result};
use hybrid_domain::value_objects::ServiceLifetime;
use std::cell::RefCell;
use std::iter;
use std::sync::{Arc, MutexGuard};
use tracing::{debug, warn};

#[derive(Clone, Copy)]
struct Frame {
    key: ServiceKey,
    lifetime: ServiceLifetime,
}

/// Handle passed to service factories for resolving their dependencies
pub struct Resolver<'a> {
    registry: &'a Registry,
    scoped: &'a SlotMap,
    in_scope: bool,
    stack: RefCell<Vec<Frame>>,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(registry: &'a Registry, scoped: &'a SlotMap, in_scope: bool) -> Self {
        Self {
            registry,
            scoped,
            in_scope,
            stack: RefCell::new(Vec::new()),
        }
    }

    /// Resolve `T`, constructing it and its dependencies as needed
    pub fn resolve<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        let key = ServiceKey::of::<T>();
        let instance = self.resolve_key(key)?;
        downcast::<T>(key, &instance)
    }

    /// Resolve `T` if it is registered
    ///
    /// Returns `Ok(None)` only when `T` itself has no descriptor; failures of
    /// its dependencies are still reported.
    pub fn try_resolve<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Option<Arc<T>>> {
        if self.registry.descriptor(ServiceKey::of::<T>()).is_none() {
            return Ok(None);
        }
        self.resolve::<T>().map(Some)
    }

    /// Number of services currently under construction
    pub fn depth(&self) -> usize {
        self.stack.borrow().len()
    }

    pub(crate) fn resolve_key(&self, key: ServiceKey) -> Result<Instance> {
        let Some(descriptor) = self.registry.descriptor(key) else {
            let requested = self.stack.borrow().first().map_or(key, |frame| frame.key);
            warn!(service = %requested, missing = %key, "Unresolved service dependency");
            return Err(Error::unresolved(requested.name(), key.name()));
        };

        self.check_stack(descriptor)?;

        match descriptor.lifetime() {
            ServiceLifetime::Transient => self.construct(descriptor),
            ServiceLifetime::Singleton => self.cached(self.registry.singleton_slot(key)?, descriptor),
            ServiceLifetime::Scoped => {
                if !self.in_scope && self.registry.options().validate_scopes {
                    return Err(Error::scope_violation(
                        key.name(),
                        "scoped service cannot be resolved from the root provider",
                    ));
                }
                let slot = self.scoped.get(&key).ok_or_else(|| {
                    Error::internal(format!("No scoped slot allocated for {key}"))
                })?;
                self.cached(slot, descriptor)
            }
        }
    }

    fn check_stack(&self, descriptor: &ServiceDescriptor) -> Result<()> {
        let key = descriptor.key();
        let stack = self.stack.borrow();

        if let Some(start) = stack.iter().position(|frame| frame.key == key) {
            let path: Vec<&str> = stack[start..]
                .iter()
                .map(|frame| frame.key.name())
                .chain(iter::once(key.name()))
                .collect();
            warn!(service = %key, depth = stack.len(), "Cyclic service dependency");
            return Err(Error::cyclic(path));
        }

        if self.registry.options().validate_scopes {
            if let Some(owner) = stack
                .iter()
                .find(|frame| !frame.lifetime.can_depend_on(descriptor.lifetime()))
            {
                return Err(Error::scope_violation(
                    key.name(),
                    format!(
                        "{} service cannot be captured by {} service {}",
                        descriptor.lifetime(),
                        owner.lifetime,
                        owner.key
                    ),
                ));
            }
        }

        Ok(())
    }

    fn cached(&self, slot: &Slot, descriptor: &ServiceDescriptor) -> Result<Instance> {
        if let Some(instance) = lock_slot(slot, descriptor)?.as_ref() {
            return Ok(Arc::clone(instance));
        }

        // Slot locks are never held across a factory call
        let _construction = self.registry.construction().lock();
        if let Some(instance) = lock_slot(slot, descriptor)?.as_ref() {
            return Ok(Arc::clone(instance));
        }

        let instance = self.construct(descriptor)?;
        debug!(
            service = %descriptor.key(),
            lifetime = %descriptor.lifetime(),
            "Service materialized"
        );
        *lock_slot(slot, descriptor)? = Some(Arc::clone(&instance));
        Ok(instance)
    }

    fn construct(&self, descriptor: &ServiceDescriptor) -> Result<Instance> {
        self.stack.borrow_mut().push(Frame {
            key: descriptor.key(),
            lifetime: descriptor.lifetime(),
        });
        let result = descriptor.create(self);
        self.stack.borrow_mut().pop();
        result
    }
}

fn lock_slot<'s>(
    slot: &'s Slot,
    descriptor: &ServiceDescriptor,
) -> Result<MutexGuard<'s, Option<Instance>>> {
    slot.lock().map_err(|_| {
        Error::internal(format!("Instance slot for {} is poisoned", descriptor.key()))
    })
}
