//! Navigation event loop
//!
//! Events are handled one at a time in arrival order. Every navigation
//! resolves its route synchronously, bumps the render generation and spawns
//! a local render task; actions spawn a task that dispatches to the shell and then
//! re-renders. A render task whose generation is stale when it starts does
//! nothing; one that becomes stale while suspended finishes but its frame is
//! dropped.

use crate::components::{AppShell, Component, RenderTree, UiAction};
use crate::routing::Router;
use hybrid_domain::error::Result;
use hybrid_domain::value_objects::PageType;
use hybrid_infrastructure::config::AppConfig;
use hybrid_infrastructure::di::{ServiceProvider, ServiceScope};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;
use tokio::task::{JoinSet, LocalSet};
use tracing::{debug, error, info, warn};

/// Input of the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Navigate to a path
    Navigate(String),
    /// Dispatch a user action to the mounted components
    Action(UiAction),
}

/// Output of one committed render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFrame {
    /// Navigation generation the frame belongs to
    pub generation: u64,
    /// Path of the navigation
    pub path: String,
    /// Page recorded by the shell, `None` for the not-found fallback
    pub page: Option<PageType>,
    /// HTML rendered per mount point selector
    pub mounts: BTreeMap<String, String>,
}

impl RenderedFrame {
    /// HTML rendered at `selector`
    pub fn html(&self, selector: &str) -> Option<&str> {
        self.mounts.get(selector).map(String::as_str)
    }
}

pub(crate) struct RootComponent {
    pub(crate) selector: String,
    pub(crate) component: Arc<dyn Component>,
}

/// Everything a render task needs, cheap to clone into the task
#[derive(Clone)]
struct RenderContext {
    roots: Arc<Vec<RootComponent>>,
    shell: Arc<AppShell>,
    generation: Arc<AtomicU64>,
    frames: mpsc::UnboundedSender<RenderedFrame>,
}

impl RenderContext {
    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    async fn render(self, generation: u64, path: String) {
        if !self.is_current(generation) {
            debug!(generation, path = %path, "Render superseded before it started");
            return;
        }

        match self.render_roots().await {
            Ok(mounts) if self.is_current(generation) => {
                let frame = RenderedFrame {
                    generation,
                    path,
                    page: self.shell.state().current_page(),
                    mounts,
                };
                debug!(generation, page = ?frame.page, "Frame committed");
                if self.frames.send(frame).is_err() {
                    debug!("Frame receiver dropped");
                }
            }
            Ok(_) => debug!(generation, path = %path, "Stale render discarded"),
            Err(err) => error!(generation, path = %path, error = %err, "Render failed"),
        }
    }

    async fn render_roots(&self) -> Result<BTreeMap<String, String>> {
        let mut mounts = BTreeMap::new();
        for root in self.roots.iter() {
            let mut tree = RenderTree::new();
            root.component.render(&mut tree).await?;
            mounts.insert(root.selector.clone(), tree.to_html());
        }
        Ok(mounts)
    }

    async fn dispatch(self, generation: u64, path: String, action: UiAction) {
        if !self.is_current(generation) {
            debug!(action = %action, "Action dropped after navigation");
            return;
        }

        let mut handled = false;
        for root in self.roots.iter() {
            match root.component.handle_event(&action).await {
                Ok(true) => handled = true,
                Ok(false) => {}
                Err(err) => {
                    error!(action = %action, error = %err, "Action failed");
                    return;
                }
            }
        }

        if handled {
            self.render(generation, path).await;
        } else {
            warn!(action = %action, "No component handled the action");
        }
    }
}

/// A wired application ready to process events
pub struct Host {
    config: Arc<AppConfig>,
    provider: ServiceProvider,
    scope: Arc<ServiceScope>,
    router: Arc<Router>,
    shell: Arc<AppShell>,
    roots: Arc<Vec<RootComponent>>,
    generation: Arc<AtomicU64>,
}

impl Host {
    pub(crate) fn new(
        config: Arc<AppConfig>,
        provider: ServiceProvider,
        scope: Arc<ServiceScope>,
        router: Arc<Router>,
        shell: Arc<AppShell>,
        roots: Vec<RootComponent>,
    ) -> Self {
        Self {
            config,
            provider,
            scope,
            router,
            shell,
            roots: Arc::new(roots),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Configuration the host was built with
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Root service provider
    pub fn provider(&self) -> &ServiceProvider {
        &self.provider
    }

    /// Scope the pages are activated in
    pub fn scope(&self) -> &ServiceScope {
        &self.scope
    }

    /// The router
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// The application shell
    pub fn shell(&self) -> &Arc<AppShell> {
        &self.shell
    }

    /// The shell's current page
    pub fn current_page(&self) -> Option<PageType> {
        self.shell.state().current_page()
    }

    /// Selectors of the mounted root components, in render order
    pub fn mount_selectors(&self) -> Vec<&str> {
        self.roots.iter().map(|root| root.selector.as_str()).collect()
    }

    /// Generation of the latest navigation
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Process `events` until the channel closes
    ///
    /// Committed frames are sent to `frames`. Render tasks are local to the
    /// calling task, so renders never run in parallel even on a multi-thread
    /// runtime. Returns once every in-flight render has finished.
    pub async fn run(
        &self,
        mut events: mpsc::Receiver<UiEvent>,
        frames: mpsc::UnboundedSender<RenderedFrame>,
    ) -> Result<()> {
        let context = RenderContext {
            roots: Arc::clone(&self.roots),
            shell: Arc::clone(&self.shell),
            generation: Arc::clone(&self.generation),
            frames,
        };
        let local = LocalSet::new();
        local
            .run_until(async move {
                let mut tasks = JoinSet::new();
                let mut path = String::new();

                info!(mounts = ?self.mount_selectors(), "Host running");

                while let Some(event) = events.recv().await {
                    match event {
                        UiEvent::Navigate(target) => {
                            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
                            match self.router.navigate(&target) {
                                Ok(route) => {
                                    info!(generation, path = %target, page = %route.page_type, "Navigation");
                                }
                                Err(err) => {
                                    warn!(generation, path = %target, error = %err, "Navigation missed");
                                }
                            }
                            path = target;
                            tasks.spawn_local(context.clone().render(generation, path.clone()));
                        }
                        UiEvent::Action(action) => {
                            debug!(action = %action, "Action received");
                            let generation = self.generation();
                            tasks.spawn_local(context.clone().dispatch(
                                generation,
                                path.clone(),
                                action,
                            ));
                        }
                    }

                    while let Some(result) = tasks.try_join_next() {
                        if let Err(err) = result {
                            error!(error = %err, "Render task panicked");
                        }
                    }
                }

                while let Some(result) = tasks.join_next().await {
                    if let Err(err) = result {
                        error!(error = %err, "Render task panicked");
                    }
                }
            })
            .await;

        info!(generation = self.generation(), "Event channel closed");
        Ok(())
    }
}

impl std::fmt::Debug for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host")
            .field("mounts", &self.mount_selectors())
            .field("generation", &self.generation())
            .field("current_page", &self.current_page())
            .finish()
    }
}
