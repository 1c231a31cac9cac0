//! Application shell
//!
//! The persistent root component. It owns the identity of the current page
//! and renders the chrome (title, navigation menu, not-found fallback)
//! around the page body produced by the route view.

use super::component::{Component, UiAction};
use super::render_tree::{Element, RenderTree};
use super::route_view::ObservedRouteView;
use crate::routing::RouteTable;
use async_trait::async_trait;
use hybrid_domain::constants::NOT_FOUND_TITLE;
use hybrid_domain::error::Result;
use hybrid_domain::value_objects::PageType;
use hybrid_infrastructure::config::ShellConfig;
use std::sync::{Arc, PoisonError, RwLock};

/// Receives the page type of every render before the page is constructed
pub trait PageObserver: Send + Sync {
    /// Record the page about to be rendered (`None` after a missed navigation)
    fn set_current_page(&self, page: Option<PageType>);

    /// The last recorded page
    fn current_page(&self) -> Option<PageType>;
}

/// Mutable state of the shell: the current page type
///
/// Starts as `None` and is overwritten on every render of the route view.
/// Single-writer convention: only the route view writes; every other
/// component only reads.
#[derive(Debug, Default)]
pub struct ShellState {
    current_page: RwLock<Option<PageType>>,
}

impl ShellState {
    /// The current page type, `None` before the first navigation or after a miss
    pub fn current_page(&self) -> Option<PageType> {
        *self
            .current_page
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn set(&self, page: Option<PageType>) {
        *self
            .current_page
            .write()
            .unwrap_or_else(PoisonError::into_inner) = page;
    }
}

/// One entry of the navigation menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Target path
    pub href: String,
    /// Visible label
    pub label: String,
    /// Page the link leads to
    pub page: PageType,
}

/// The application shell
#[derive(Debug)]
pub struct AppShell {
    title: String,
    nav: Vec<NavLink>,
    state: ShellState,
}

impl AppShell {
    /// Create a shell titled from `config` with one menu entry per routable page
    ///
    /// Only parameterless templates become menu entries; the first one
    /// declared for a page wins.
    pub fn new(config: &ShellConfig, routes: &RouteTable) -> Self {
        let mut nav: Vec<NavLink> = Vec::new();
        for binding in routes.bindings() {
            let page = binding.page_type();
            if binding.template().has_parameters() || nav.iter().any(|link| link.page == page) {
                continue;
            }
            nav.push(NavLink {
                href: binding.template().as_str().to_string(),
                label: page.name().to_string(),
                page,
            });
        }

        Self {
            title: config.title.clone(),
            nav,
            state: ShellState::default(),
        }
    }

    /// Shell title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Navigation menu entries
    pub fn nav(&self) -> &[NavLink] {
        &self.nav
    }

    /// Shell state
    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Title of the current page, or the not-found title
    pub fn page_title(&self) -> String {
        match self.state.current_page() {
            Some(page) => format!("{} - {}", page.name(), self.title),
            None => format!("{} - {}", NOT_FOUND_TITLE, self.title),
        }
    }

    /// Render the chrome around an already rendered page `body`
    pub fn render_layout(&self, body: RenderTree, tree: &mut RenderTree) {
        let current = self.state.current_page();

        let mut menu = Element::new("nav").attr("class", "nav-menu");
        for link in &self.nav {
            let mut anchor = Element::new("a").attr("href", link.href.as_str());
            if current == Some(link.page) {
                anchor = anchor.attr("class", "active").attr("aria-current", "page");
            }
            menu = menu.child(anchor.text(link.label.as_str()));
        }

        let article = match current {
            Some(_) => Element::new("article").attr("class", "content").content(body),
            None => Element::new("article")
                .attr("class", "content")
                .child(Element::new("h1").text(NOT_FOUND_TITLE))
                .child(
                    Element::new("p")
                        .attr("role", "alert")
                        .text("Sorry, there's nothing at this address."),
                ),
        };

        tree.push(
            Element::new("div")
                .attr("class", "page")
                .child(Element::new("div").attr("class", "sidebar").child(menu))
                .child(
                    Element::new("main")
                        .child(
                            Element::new("div")
                                .attr("class", "top-row")
                                .text(self.title.as_str()),
                        )
                        .child(article),
                ),
        );
    }
}

impl PageObserver for AppShell {
    fn set_current_page(&self, page: Option<PageType>) {
        self.state.set(page);
    }

    fn current_page(&self) -> Option<PageType> {
        self.state.current_page()
    }
}

/// Root component mounted for the shell
///
/// Renders the route view first, which records the page type in the shell,
/// then the chrome, which reads it in the same pass.
pub struct ShellView {
    shell: Arc<AppShell>,
    route_view: ObservedRouteView,
}

impl ShellView {
    /// Combine `shell` with the route view observing it
    pub fn new(shell: Arc<AppShell>, route_view: ObservedRouteView) -> Self {
        Self { shell, route_view }
    }

    /// The shell
    pub fn shell(&self) -> &Arc<AppShell> {
        &self.shell
    }
}

#[async_trait]
impl Component for ShellView {
    async fn render(&self, tree: &mut RenderTree) -> Result<()> {
        let mut body = RenderTree::new();
        self.route_view.render(&mut body).await?;
        self.shell.render_layout(body, tree);
        Ok(())
    }

    async fn handle_event(&self, action: &UiAction) -> Result<bool> {
        self.route_view.handle_event(action).await
    }
}
