//! Main application configuration

use super::{ContainerConfig, HostConfig, LoggingConfig, ShellConfig};
use serde::{Deserialize, Serialize};

/// Root configuration of the hybrid shell
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Host environment configuration
    #[serde(default)]
    pub host: HostConfig,

    /// Service registry configuration
    #[serde(default)]
    pub container: ContainerConfig,

    /// Application shell configuration
    #[serde(default)]
    pub shell: ShellConfig,
}
