//! Route matching results

use super::page::PageType;
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Named parameters captured while matching a route template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a parameter
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.0.insert(name.into(), value.into());
    }

    /// Raw value of a parameter
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Parameter parsed as `T`; `None` when absent or unparsable
    pub fn parse<T: FromStr>(&self, name: &str) -> Option<T> {
        self.get(name).and_then(|value| value.parse().ok())
    }

    /// Iterate parameters in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameters were captured
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A navigation resolved to a page
///
/// Created per navigation and discarded once the render has been dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The navigated path, without query string or fragment
    pub path: String,
    /// The template that matched
    pub template: String,
    /// The page bound to the template
    pub page_type: PageType,
    /// Parameters captured from the path
    pub params: RouteParams,
}

impl RouteMatch {
    /// Create a route match
    pub fn new(
        path: impl Into<String>,
        template: impl Into<String>,
        page_type: PageType,
        params: RouteParams,
    ) -> Self {
        Self {
            path: path.into(),
            template: template.into(),
            page_type,
            params,
        }
    }
}
