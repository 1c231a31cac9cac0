//! Error handling types

use crate::constants::CYCLE_SEPARATOR;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the hybrid shell
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid wiring; fatal at startup
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A service identity was bound twice in the same registry
    #[error("Service already registered: {service}")]
    DuplicateRegistration {
        /// The identity that was already bound
        service: String,
    },

    /// A service, or one of its transitive dependencies, has no descriptor
    #[error("Unable to resolve {service}: no registration for {missing}")]
    UnresolvedDependency {
        /// The identity whose resolution failed
        service: String,
        /// The identity that has no descriptor
        missing: String,
    },

    /// Resolution revisited an identity already on the resolution stack
    #[error("Cyclic dependency detected: {}", path.join(CYCLE_SEPARATOR))]
    CyclicDependency {
        /// Identities from the first occurrence back to the repeated one
        path: Vec<String>,
    },

    /// A scoped service was requested where no scope applies
    #[error("Scope violation for {service}: {message}")]
    ScopeViolation {
        /// The offending identity
        service: String,
        /// Description of the violation
        message: String,
    },

    /// Host interop call failed (function threw, timed out or is unavailable)
    #[error("Interop error calling {function}: {message}")]
    Interop {
        /// Name of the host function
        function: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// No page resolves for a navigation
    #[error("No route matches path: {path}")]
    RouteMismatch {
        /// The path that did not match
        path: String,
    },

    /// HTTP client boundary failure
    #[error("HTTP error: {message}")]
    Http {
        /// Description of the HTTP error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Service resolution error creation methods
impl Error {
    /// Create a duplicate registration error
    pub fn duplicate_registration<S: Into<String>>(service: S) -> Self {
        Self::DuplicateRegistration {
            service: service.into(),
        }
    }

    /// Create an unresolved dependency error
    pub fn unresolved<S: Into<String>, M: Into<String>>(service: S, missing: M) -> Self {
        Self::UnresolvedDependency {
            service: service.into(),
            missing: missing.into(),
        }
    }

    /// Create a cyclic dependency error from the identities along the cycle
    pub fn cyclic<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::CyclicDependency {
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a scope violation error
    pub fn scope_violation<S: Into<String>, M: Into<String>>(service: S, message: M) -> Self {
        Self::ScopeViolation {
            service: service.into(),
            message: message.into(),
        }
    }
}

// Host boundary error creation methods
impl Error {
    /// Create an interop error
    pub fn interop<F: Into<String>, S: Into<String>>(function: F, message: S) -> Self {
        Self::Interop {
            function: function.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an interop error with source
    pub fn interop_with_source<
        F: Into<String>,
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        function: F,
        message: S,
        source: E,
    ) -> Self {
        Self::Interop {
            function: function.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a route mismatch error
    pub fn route_mismatch<S: Into<String>>(path: S) -> Self {
        Self::RouteMismatch { path: path.into() }
    }

    /// Create an HTTP error
    pub fn http<S: Into<String>>(message: S) -> Self {
        Self::Http {
            message: message.into(),
            source: None,
        }
    }

    /// Create an HTTP error with source
    pub fn http_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Http {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl Error {
    /// Whether the error degrades the UI instead of aborting startup or a render
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Interop { .. } | Self::RouteMismatch { .. } | Self::Http { .. }
        )
    }

    /// Whether the error stems from service resolution
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::UnresolvedDependency { .. }
                | Self::CyclicDependency { .. }
                | Self::ScopeViolation { .. }
        )
    }
}
