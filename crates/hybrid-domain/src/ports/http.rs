//! HTTP Client Port
//!
//! An externally configured client bound to a base address. The core neither
//! constructs nor validates the address; relative paths are resolved against
//! it by the implementation.

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// HTTP client bound to a base address
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// The base address relative requests are resolved against
    fn base_address(&self) -> &str;

    /// GET `relative` and decode the body as JSON
    async fn get_json(&self, relative: &str) -> Result<Value>;
}
