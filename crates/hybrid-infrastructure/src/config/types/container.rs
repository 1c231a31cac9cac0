//! Service registry configuration types

use serde::{Deserialize, Serialize};

/// Service registry configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Resolve every registration once while building the provider
    pub validate_on_build: bool,

    /// Reject scoped services resolved from the root or captured by singletons
    pub validate_scopes: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            validate_on_build: true,
            validate_scopes: true,
        }
    }
}
