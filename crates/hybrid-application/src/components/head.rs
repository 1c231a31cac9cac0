//! Head outlet

use super::component::Component;
use super::render_tree::{Element, RenderTree};
use super::shell::AppShell;
use async_trait::async_trait;
use hybrid_domain::error::Result;
use std::sync::Arc;

/// Root component rendering the document `<title>`
///
/// Reads the shell's current page; it never writes it, so it must render
/// after the shell in the same pass.
pub struct HeadOutlet {
    shell: Arc<AppShell>,
}

impl HeadOutlet {
    /// Create an outlet reading from `shell`
    pub fn new(shell: Arc<AppShell>) -> Self {
        Self { shell }
    }
}

#[async_trait]
impl Component for HeadOutlet {
    async fn render(&self, tree: &mut RenderTree) -> Result<()> {
        tree.push(Element::new("title").text(self.shell.page_title()));
        Ok(())
    }
}
