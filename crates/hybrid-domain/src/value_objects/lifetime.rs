//! Service lifetime policy

use serde::{Deserialize, Serialize};
use std::fmt;

/// How long a resolved service instance lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceLifetime {
    /// One instance per provider, shared by every consumer
    Singleton,
    /// One instance per scope
    Scoped,
    /// A new instance on every resolution
    Transient,
}

impl ServiceLifetime {
    /// Whether instances of this lifetime are cached
    pub fn is_cached(self) -> bool {
        !matches!(self, Self::Transient)
    }

    /// Whether a service of this lifetime may depend on one of `dependency`
    ///
    /// A singleton must not capture a scoped instance; it would outlive its scope.
    pub fn can_depend_on(self, dependency: ServiceLifetime) -> bool {
        !matches!((self, dependency), (Self::Singleton, Self::Scoped))
    }
}

impl fmt::Display for ServiceLifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Singleton => write!(f, "singleton"),
            Self::Scoped => write!(f, "scoped"),
            Self::Transient => write!(f, "transient"),
        }
    }
}
