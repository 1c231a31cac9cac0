//! Client Services
//!
//! Implementations of the service contracts declared in
//! `hybrid_domain::ports::services`, plus the composition root that binds
//! them into a [`ServiceCollection`].
//!
//! [`ServiceCollection`]: hybrid_infrastructure::di::ServiceCollection

pub mod first;
pub mod registration;
pub mod second;

pub use first::MyFirstService;
pub use registration::register_client_services;
pub use second::MySecondService;
