//! Home page

use crate::components::{Component, Element, Page, RenderTree, UiAction};
use async_trait::async_trait;
use hybrid_domain::constants::{ALERT_MESSAGE, SHOW_ALERT_FUNCTION};
use hybrid_domain::error::Result;
use hybrid_domain::ports::{FirstService, HostInterop};
use hybrid_domain::value_objects::RouteParams;
use hybrid_infrastructure::di::ServiceScope;
use serde_json::json;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{info, warn};

/// Action name of the alert button
pub const TRIGGER_ALERT_ACTION: &str = "trigger-alert";

/// Landing page with a button that calls into the host
pub struct Home {
    first: Arc<dyn FirstService>,
    interop: Arc<dyn HostInterop>,
    status: Mutex<Option<String>>,
}

impl Home {
    /// Create the page with its injected services
    pub fn new(first: Arc<dyn FirstService>, interop: Arc<dyn HostInterop>) -> Self {
        Self {
            first,
            interop,
            status: Mutex::new(None),
        }
    }

    /// Status line shown under the button
    pub fn status(&self) -> Option<String> {
        self.status
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_status(&self, status: impl Into<String>) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = Some(status.into());
    }

    async fn trigger_alert(&self) -> Result<()> {
        match self
            .interop
            .invoke_void(SHOW_ALERT_FUNCTION, vec![json!(ALERT_MESSAGE)])
            .await
        {
            Ok(()) => {
                info!(function = SHOW_ALERT_FUNCTION, "Alert shown");
                self.set_status("Alert shown");
                Ok(())
            }
            Err(err) if err.is_recoverable() => {
                warn!(error = %err, "Alert could not be shown");
                self.set_status(format!("Alert failed: {err}"));
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl Component for Home {
    async fn render(&self, tree: &mut RenderTree) -> Result<()> {
        tree.push(Element::new("h1").text("Hello, world!"))
            .push(Element::new("p").text("Welcome to your new app."))
            .push(Element::new("p").text(format!(
                "{} is wired with {}",
                self.first.name(),
                self.first.second().name()
            )))
            .push(
                Element::new("button")
                    .attr("class", "btn btn-primary")
                    .attr("data-action", TRIGGER_ALERT_ACTION)
                    .text("Show alert"),
            );
        if let Some(status) = self.status() {
            tree.push(Element::new("p").attr("role", "status").text(status));
        }
        Ok(())
    }

    async fn handle_event(&self, action: &UiAction) -> Result<bool> {
        if action.name() != TRIGGER_ALERT_ACTION {
            return Ok(false);
        }
        self.trigger_alert().await?;
        Ok(true)
    }
}

impl Page for Home {
    const PAGE_NAME: &'static str = "Home";

    fn activate(scope: &ServiceScope, _params: &RouteParams) -> Result<Self> {
        Ok(Self::new(
            scope.resolve::<dyn FirstService>()?,
            scope.resolve::<dyn HostInterop>()?,
        ))
    }
}
