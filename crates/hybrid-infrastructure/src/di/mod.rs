//! Service Registry
//!
//! A small dependency injection container mapping an abstract service
//! identity to a factory and a lifetime policy.
//!
//! ## Architecture
//!
//! ```text
//! ServiceCollection (startup, mutable)
//!        │ build(options)
//!        ▼
//! ServiceProvider (root, singleton cache) ── create_scope() ──► ServiceScope (scoped cache)
//!        │                                                          │
//!        └──────────────► Resolver (per resolution, tracks the stack) ◄┘
//! ```
//!
//! Factories receive a [`Resolver`] and pull their own dependencies from it,
//! so constructor injection is explicit and every resolution is a depth-first
//! walk of the dependency graph. The resolution stack is checked before each
//! nested resolution, which turns a cycle into [`Error::CyclicDependency`]
//! instead of unbounded recursion.
//!
//! ## Usage
//!
//! ```
//! use hybrid_infrastructure::di::{ProviderOptions, ServiceCollection};
//! use std::sync::Arc;
//!
//! # fn main() -> hybrid_domain::Result<()> {
//! let mut services = ServiceCollection::new();
//! services.add_singleton::<String, _>(|_| Ok(Arc::new("hello".to_string())))?;
//!
//! let provider = services.build(ProviderOptions::default())?;
//! let first = provider.resolve::<String>()?;
//! let second = provider.resolve::<String>()?;
//! assert!(Arc::ptr_eq(&first, &second));
//! # Ok(())
//! # }
//! ```
//!
//! [`Error::CyclicDependency`]: hybrid_domain::Error::CyclicDependency

pub mod collection;
pub mod descriptor;
pub mod key;
pub mod provider;
pub mod resolver;

pub use collection::ServiceCollection;
pub use descriptor::ServiceDescriptor;
pub use key::ServiceKey;
pub use provider::{ProviderOptions, ServiceProvider, ServiceScope};
pub use resolver::Resolver;
