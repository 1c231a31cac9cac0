//! Host environment configuration types

use crate::constants::*;
use hybrid_domain::constants::SHOW_ALERT_FUNCTION;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Host environment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Base address the HTTP client is bound to
    pub base_address: String,

    /// Deadline for a single interop call (milliseconds)
    pub interop_timeout_ms: u64,

    /// Functions the host environment exposes to components
    pub functions: Vec<String>,

    /// Mount point selector of the application shell
    pub app_mount: String,

    /// Mount point selector of the head outlet
    pub head_mount: String,
}

impl HostConfig {
    /// Interop deadline as a duration
    pub fn interop_timeout(&self) -> Duration {
        Duration::from_millis(self.interop_timeout_ms)
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            base_address: DEFAULT_BASE_ADDRESS.to_string(),
            interop_timeout_ms: DEFAULT_INTEROP_TIMEOUT_MS,
            functions: vec![SHOW_ALERT_FUNCTION.to_string()],
            app_mount: DEFAULT_APP_MOUNT.to_string(),
            head_mount: DEFAULT_HEAD_MOUNT.to_string(),
        }
    }
}
