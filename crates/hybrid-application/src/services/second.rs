//! Leaf service of the client graph

use hybrid_domain::ports::SecondService;

/// Service with no dependencies
#[derive(Debug, Default)]
pub struct MySecondService;

impl MySecondService {
    /// Create the service
    pub fn new() -> Self {
        Self
    }
}

impl SecondService for MySecondService {
    fn name(&self) -> &'static str {
        "MySecondService"
    }
}
