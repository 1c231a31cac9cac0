//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `hybrid_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "hybrid.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "hybrid";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "HYBRID";

/// Separator for nested keys in environment variables (e.g. `HYBRID_HOST__BASE_ADDRESS`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable overriding the configured log filter
pub const LOG_ENV_VAR: &str = "HYBRID_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 5;

/// Log file stem when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "hybrid";

// ============================================================================
// HOST CONSTANTS
// ============================================================================

/// Base address the HTTP client is bound to
pub const DEFAULT_BASE_ADDRESS: &str = "http://localhost:5000/";

/// Deadline for a single host interop call in milliseconds
pub const DEFAULT_INTEROP_TIMEOUT_MS: u64 = 5_000;

/// Mount point of the application shell
pub const DEFAULT_APP_MOUNT: &str = "#app";

/// Mount point of the head outlet
pub const DEFAULT_HEAD_MOUNT: &str = "head::after";

/// HTTP request timeout in seconds
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// SHELL CONSTANTS
// ============================================================================

/// Title rendered by the shell
pub const DEFAULT_SHELL_TITLE: &str = "Hybrid Shell";
