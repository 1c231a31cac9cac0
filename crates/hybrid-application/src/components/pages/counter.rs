//! Counter page

use crate::components::{Component, Element, Page, RenderTree, UiAction};
use async_trait::async_trait;
use hybrid_domain::error::Result;
use hybrid_domain::value_objects::RouteParams;
use hybrid_infrastructure::di::ServiceScope;
use std::sync::atomic::{AtomicI64, Ordering};

/// Action name of the increment button
pub const INCREMENT_ACTION: &str = "increment";

/// Route parameter holding the initial count
pub const START_PARAM: &str = "start";

/// Page counting button clicks
#[derive(Debug, Default)]
pub struct Counter {
    count: AtomicI64,
}

impl Counter {
    /// Create a counter starting at `start`
    pub fn new(start: i64) -> Self {
        Self {
            count: AtomicI64::new(start),
        }
    }

    /// Current count
    pub fn count(&self) -> i64 {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Component for Counter {
    async fn render(&self, tree: &mut RenderTree) -> Result<()> {
        tree.push(Element::new("h1").text("Counter"))
            .push(
                Element::new("p")
                    .attr("role", "status")
                    .text(format!("Current count: {}", self.count())),
            )
            .push(
                Element::new("button")
                    .attr("class", "btn btn-primary")
                    .attr("data-action", INCREMENT_ACTION)
                    .text("Click me"),
            );
        Ok(())
    }

    async fn handle_event(&self, action: &UiAction) -> Result<bool> {
        if action.name() != INCREMENT_ACTION {
            return Ok(false);
        }
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }
}

impl Page for Counter {
    const PAGE_NAME: &'static str = "Counter";

    fn activate(_scope: &ServiceScope, params: &RouteParams) -> Result<Self> {
        Ok(Self::new(params.parse(START_PARAM).unwrap_or(0)))
    }
}
