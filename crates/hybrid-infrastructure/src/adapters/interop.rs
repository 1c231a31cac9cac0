//! Host interop adapters

use crate::error_ext::ErrorContext;
use async_trait::async_trait;
use hybrid_domain::error::{Error, Result};
use hybrid_domain::ports::HostInterop;
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{info, warn};

/// One recorded host function invocation
#[derive(Debug, Clone, PartialEq)]
pub struct InteropCall {
    /// Name of the invoked function
    pub function: String,
    /// Positional arguments
    pub args: Vec<Value>,
}

/// Host bridge for a host without a script engine
///
/// Only functions declared at construction are available; each invocation is
/// logged and recorded. Calling anything else fails with an interop error.
pub struct HeadlessHostInterop {
    functions: BTreeSet<String>,
    calls: Mutex<Vec<InteropCall>>,
}

impl HeadlessHostInterop {
    /// Create a bridge exposing `functions`
    pub fn new<I, S>(functions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            functions: functions.into_iter().map(Into::into).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Invocations recorded so far
    pub fn calls(&self) -> Vec<InteropCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Whether `function` is exposed
    pub fn exposes(&self, function: &str) -> bool {
        self.functions.contains(function)
    }
}

#[async_trait]
impl HostInterop for HeadlessHostInterop {
    async fn invoke(&self, function: &str, args: Vec<Value>) -> Result<Value> {
        if !self.exposes(function) {
            warn!(function, "Host function is not available");
            return Err(Error::interop(function, "function is not available on the host"));
        }

        let shown = Value::Array(args.clone());
        info!(function, args = %shown, "Host function invoked");
        self.calls
            .lock()
            .map_err(|_| Error::internal("Interop call log is poisoned"))?
            .push(InteropCall {
                function: function.to_string(),
                args,
            });
        Ok(Value::Null)
    }
}

/// Decorator failing any call that outlives the deadline
pub struct TimeoutHostInterop {
    inner: Arc<dyn HostInterop>,
    deadline: Duration,
}

impl TimeoutHostInterop {
    /// Wrap `inner` with `deadline`
    pub fn new(inner: Arc<dyn HostInterop>, deadline: Duration) -> Self {
        Self { inner, deadline }
    }
}

#[async_trait]
impl HostInterop for TimeoutHostInterop {
    async fn invoke(&self, function: &str, args: Vec<Value>) -> Result<Value> {
        tokio::time::timeout(self.deadline, self.inner.invoke(function, args))
            .await
            .interop_context(function)?
    }
}
