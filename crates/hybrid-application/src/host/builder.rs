//! Host builder

use super::event_loop::{Host, RootComponent};
use crate::components::pages::page_routes;
use crate::components::{
    AppShell, Component, DefaultRouteRenderer, HeadOutlet, ObservedRouteView, PageObserver,
    ShellView,
};
use crate::routing::{RouteTable, Router};
use crate::services::register_client_services;
use hybrid_domain::error::{Error, Result};
use hybrid_domain::ports::{HostInterop, HttpClient};
use hybrid_infrastructure::adapters::{HeadlessHostInterop, ReqwestHttpClient, TimeoutHostInterop};
use hybrid_infrastructure::config::AppConfig;
use hybrid_infrastructure::di::{ProviderOptions, ServiceCollection};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

type ServiceConfigurator = Box<dyn FnOnce(&mut ServiceCollection) -> Result<()>>;

/// Kind of root component bound to a mount point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountKind {
    /// The application shell with its route view
    Shell,
    /// The document head outlet
    HeadOutlet,
}

/// A root component registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPoint {
    /// Selector of the host element
    pub selector: String,
    /// Component mounted there
    pub kind: MountKind,
}

/// Builder for a [`Host`]
///
/// ```no_run
/// use hybrid_application::HostBuilder;
/// use hybrid_infrastructure::config::AppConfig;
///
/// # fn main() -> hybrid_domain::Result<()> {
/// let host = HostBuilder::new(AppConfig::default())
///     .mount_shell("#app")
///     .mount_head_outlet("head::after")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct HostBuilder {
    config: AppConfig,
    mounts: Vec<MountPoint>,
    configurators: Vec<ServiceConfigurator>,
    routes: Option<RouteTable>,
}

impl HostBuilder {
    /// Create a builder with no root components
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            mounts: Vec::new(),
            configurators: Vec::new(),
            routes: None,
        }
    }

    /// Create a builder with the shell and head outlet mounted at the
    /// configured selectors
    pub fn create_default(config: AppConfig) -> Self {
        let app_mount = config.host.app_mount.clone();
        let head_mount = config.host.head_mount.clone();
        Self::new(config)
            .mount_shell(app_mount)
            .mount_head_outlet(head_mount)
    }

    /// Mount the application shell at `selector`
    pub fn mount_shell(mut self, selector: impl Into<String>) -> Self {
        self.mounts.push(MountPoint {
            selector: selector.into(),
            kind: MountKind::Shell,
        });
        self
    }

    /// Mount the head outlet at `selector`
    pub fn mount_head_outlet(mut self, selector: impl Into<String>) -> Self {
        self.mounts.push(MountPoint {
            selector: selector.into(),
            kind: MountKind::HeadOutlet,
        });
        self
    }

    /// Add service registrations
    ///
    /// Runs after the client services are registered. Host services
    /// (`HostInterop`, `HttpClient`) registered here replace the defaults.
    pub fn configure_services<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(&mut ServiceCollection) -> Result<()> + 'static,
    {
        self.configurators.push(Box::new(configure));
        self
    }

    /// Use `routes` instead of the bundled page routes
    pub fn routes(mut self, routes: RouteTable) -> Self {
        self.routes = Some(routes);
        self
    }

    /// Wire everything and return a host ready to run
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when a mount point is missing or
    /// reused, when the route view has no observer, or when the service graph
    /// fails validation. Nothing is rendered in that case.
    pub fn build(self) -> Result<Host> {
        validate_mounts(&self.mounts)?;

        let mut services = ServiceCollection::new();
        register_client_services(&mut services)?;
        for configure in self.configurators {
            configure(&mut services)?;
        }
        register_host_services(&mut services, &self.config)?;

        let provider = services.build(ProviderOptions::from(self.config.container))?;
        let scope = Arc::new(provider.create_scope());

        let routes = Arc::new(match self.routes {
            Some(routes) => routes,
            None => page_routes()?,
        });
        let router = Router::new(Arc::clone(&routes));

        let shell = self
            .mounts
            .iter()
            .any(|mount| mount.kind == MountKind::Shell)
            .then(|| Arc::new(AppShell::new(&self.config.shell, &routes)));

        let mut route_view = ObservedRouteView::builder(Arc::new(DefaultRouteRenderer::new(
            Arc::clone(&routes),
            Arc::clone(&scope),
        )))
        .current(router.subscribe());
        if let Some(shell) = &shell {
            route_view = route_view.observer(Arc::clone(shell) as Arc<dyn PageObserver>);
        }
        let route_view = route_view.build()?;

        let shell = shell.ok_or_else(|| Error::configuration("No mount point for the shell"))?;
        let mut route_view = Some(route_view);
        let mut roots = Vec::with_capacity(self.mounts.len());
        // The shell writes the current page, so it renders before any reader
        for kind in [MountKind::Shell, MountKind::HeadOutlet] {
            for mount in self.mounts.iter().filter(|mount| mount.kind == kind) {
                let component: Arc<dyn Component> = match kind {
                    MountKind::Shell => {
                        let view = route_view.take().ok_or_else(|| {
                            Error::configuration("The shell can only be mounted once")
                        })?;
                        Arc::new(ShellView::new(Arc::clone(&shell), view))
                    }
                    MountKind::HeadOutlet => Arc::new(HeadOutlet::new(Arc::clone(&shell))),
                };
                roots.push(RootComponent {
                    selector: mount.selector.clone(),
                    component,
                });
            }
        }

        info!(
            mounts = roots.len(),
            routes = routes.len(),
            services = provider.service_count(),
            "Host built"
        );

        Ok(Host::new(
            Arc::new(self.config),
            provider,
            scope,
            Arc::new(router),
            shell,
            roots,
        ))
    }
}

fn validate_mounts(mounts: &[MountPoint]) -> Result<()> {
    let mut selectors = HashSet::new();
    for mount in mounts {
        if mount.selector.trim().is_empty() {
            return Err(Error::configuration("Mount point selector cannot be empty"));
        }
        if !selectors.insert(mount.selector.as_str()) {
            return Err(Error::configuration(format!(
                "Mount point '{}' is used by more than one root component",
                mount.selector
            )));
        }
    }
    Ok(())
}

/// Register the host boundary services not registered yet
///
/// - `AppConfig` as an instance
/// - `dyn HostInterop` singleton: headless bridge behind a timeout
/// - `dyn HttpClient` scoped: `reqwest` client bound to the base address
pub fn register_host_services(services: &mut ServiceCollection, config: &AppConfig) -> Result<()> {
    services.add_instance(Arc::new(config.clone()))?;

    if !services.contains::<dyn HostInterop>() {
        let functions = config.host.functions.clone();
        let deadline = config.host.interop_timeout();
        services.add_singleton::<dyn HostInterop, _>(move |_| {
            let headless = Arc::new(HeadlessHostInterop::new(functions.clone()));
            Ok(Arc::new(TimeoutHostInterop::new(headless, deadline)))
        })?;
    }

    if !services.contains::<dyn HttpClient>() {
        services.add_scoped::<dyn HttpClient, _>(|r| {
            let config = r.resolve::<AppConfig>()?;
            Ok(Arc::new(ReqwestHttpClient::new(&config.host.base_address)?))
        })?;
    }

    Ok(())
}
