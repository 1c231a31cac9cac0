//! Application shell configuration types

use crate::constants::DEFAULT_SHELL_TITLE;
use serde::{Deserialize, Serialize};

/// Application shell configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Title rendered in the shell chrome
    pub title: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_SHELL_TITLE.to_string(),
        }
    }
}
