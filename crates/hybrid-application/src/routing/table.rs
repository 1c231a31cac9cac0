//! Route table

use super::template::{RouteTemplate, strip_query};
use crate::components::{Component, Page};
use hybrid_domain::error::{Error, Result};
use hybrid_domain::value_objects::{PageType, RouteMatch, RouteParams};
use hybrid_infrastructure::di::ServiceScope;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Constructs a page from its scope and the captured route parameters
pub type PageActivator = fn(&ServiceScope, &RouteParams) -> Result<Arc<dyn Component>>;

fn activate<P: Page>(scope: &ServiceScope, params: &RouteParams) -> Result<Arc<dyn Component>> {
    Ok(Arc::new(P::activate(scope, params)?))
}

/// One template bound to a page type
#[derive(Clone)]
pub struct RouteBinding {
    template: RouteTemplate,
    page_type: PageType,
    activator: PageActivator,
}

impl RouteBinding {
    /// The bound template
    pub fn template(&self) -> &RouteTemplate {
        &self.template
    }

    /// The page rendered for this template
    pub fn page_type(&self) -> PageType {
        self.page_type
    }

    /// Construct the page for a match of this binding
    pub fn activate(&self, scope: &ServiceScope, params: &RouteParams) -> Result<Arc<dyn Component>> {
        (self.activator)(scope, params)
    }
}

impl std::fmt::Debug for RouteBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteBinding")
            .field("template", &self.template.as_str())
            .field("page_type", &self.page_type)
            .finish()
    }
}

/// Ordered set of template to page bindings
///
/// Read-only once built. Bindings are tested in declaration order and the
/// first match wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    bindings: Vec<RouteBinding>,
}

impl RouteTable {
    /// Start declaring a route table
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// Resolve `path` to the first matching binding
    pub fn resolve(&self, path: &str) -> Result<RouteMatch> {
        let path = strip_query(path);
        self.bindings
            .iter()
            .find_map(|binding| {
                binding.template.matches(path).map(|params| {
                    RouteMatch::new(path, binding.template.as_str(), binding.page_type, params)
                })
            })
            .ok_or_else(|| Error::route_mismatch(path))
    }

    /// The binding a match was produced from
    pub fn binding_for(&self, route: &RouteMatch) -> Option<&RouteBinding> {
        self.bindings.iter().find(|binding| {
            binding.page_type == route.page_type && binding.template.as_str() == route.template
        })
    }

    /// Construct the page for `route`
    pub fn activate(&self, route: &RouteMatch, scope: &ServiceScope) -> Result<Arc<dyn Component>> {
        let binding = self
            .binding_for(route)
            .ok_or_else(|| Error::route_mismatch(route.path.as_str()))?;
        debug!(page = %route.page_type, template = %route.template, "Activating page");
        binding.activate(scope, &route.params)
    }

    /// Bindings in declaration order
    pub fn bindings(&self) -> &[RouteBinding] {
        &self.bindings
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the table has no bindings
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Builder for [`RouteTable`]
///
/// Templates are parsed when the table is built, so the first invalid or
/// duplicate template is reported by [`RouteTableBuilder::build`].
#[derive(Default)]
pub struct RouteTableBuilder {
    pending: Vec<(String, PageType, PageActivator)>,
}

impl RouteTableBuilder {
    /// Bind `template` to page `P`
    pub fn page<P: Page>(mut self, template: &str) -> Self {
        self.pending
            .push((template.to_string(), P::page_type(), activate::<P> as PageActivator));
        self
    }

    /// Bind `template` to an explicit page type and activator
    pub fn route(mut self, template: &str, page_type: PageType, activator: PageActivator) -> Self {
        self.pending.push((template.to_string(), page_type, activator));
        self
    }

    /// Parse every template and build the table
    pub fn build(self) -> Result<RouteTable> {
        let mut shapes: HashMap<String, String> = HashMap::new();
        let mut bindings = Vec::with_capacity(self.pending.len());

        for (raw, page_type, activator) in self.pending {
            let template = RouteTemplate::parse(&raw)?;
            if let Some(existing) = shapes.insert(template.shape(), raw.clone()) {
                return Err(Error::configuration(format!(
                    "Route template '{raw}' duplicates '{existing}'"
                )));
            }
            bindings.push(RouteBinding {
                template,
                page_type,
                activator,
            });
        }

        debug!(routes = bindings.len(), "Route table built");
        Ok(RouteTable { bindings })
    }
}
