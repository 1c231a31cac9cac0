//! Configuration types module

pub mod app;
pub mod container;
pub mod host;
pub mod logging;
pub mod shell;

// Re-export main types
pub use app::AppConfig;
pub use container::ContainerConfig;
pub use host::HostConfig;
pub use logging::LoggingConfig;
pub use shell::ShellConfig;
