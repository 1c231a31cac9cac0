//! Host Interop Port
//!
//! Components call into the host environment (for example to show an alert)
//! through this port. Failures are reported as [`Error::Interop`] and are
//! never retried here; the calling component decides whether to log and
//! continue.
//!
//! ```no_run
//! use hybrid_domain::ports::HostInterop;
//! use std::sync::Arc;
//!
//! async fn alert(interop: Arc<dyn HostInterop>) -> hybrid_domain::Result<()> {
//!     interop
//!         .invoke_void("showAlert", vec!["hello".into()])
//!         .await
//! }
//! ```
//!
//! [`Error::Interop`]: crate::error::Error::Interop

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Bridge to functions exposed by the host environment
#[async_trait]
pub trait HostInterop: Send + Sync {
    /// Invoke `function` with positional `args` and return its result
    async fn invoke(&self, function: &str, args: Vec<Value>) -> Result<Value>;

    /// Invoke `function` and discard its result
    async fn invoke_void(&self, function: &str, args: Vec<Value>) -> Result<()> {
        self.invoke(function, args).await.map(|_| ())
    }
}
