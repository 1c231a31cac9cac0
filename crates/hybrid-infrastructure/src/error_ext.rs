//! Error extension utilities
//!
//! Context extension methods that convert foreign errors into the domain
//! [`Error`] taxonomy at the infrastructure boundary.

use hybrid_domain::error::{Error, Result};
use std::fmt;

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use hybrid_infrastructure::error_ext::ErrorContext;
///
/// let content = std::fs::read_to_string(&path)
///     .config_context(format!("Failed to read config file: {}", path.display()))?;
///
/// let response = client.get(url).send().await.http_context("GET weather")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;

    /// Add context for a host interop call to `function`
    fn interop_context(self, function: &str) -> Result<T>
    where
        Self: Sized;

    /// Add context for HTTP client operations
    fn http_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::Configuration {
            message: format!("{}: {}", context, err),
            source: Some(Box::new(err)),
        })
    }

    fn interop_context(self, function: &str) -> Result<T>
    where
        Self: Sized,
    {
        self.map_err(|err| Error::Interop {
            function: function.to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        })
    }

    fn http_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::Http {
            message: format!("{}: {}", context, err),
            source: Some(Box::new(err)),
        })
    }
}
