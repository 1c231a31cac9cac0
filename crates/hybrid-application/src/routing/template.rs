//! Route templates

use hybrid_domain::error::{Error, Result};
use hybrid_domain::value_objects::RouteParams;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Parameter(String),
    CatchAll(String),
}

/// A parsed path pattern
///
/// Literal segments match case-insensitively, `{name}` captures exactly one
/// segment and a trailing `{*name}` captures the rest of the path (possibly
/// empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl RouteTemplate {
    /// Parse `template`
    pub fn parse(template: &str) -> Result<Self> {
        if !template.starts_with('/') {
            return Err(Error::configuration(format!(
                "Route template '{template}' must start with '/'"
            )));
        }

        let parts: Vec<&str> = split_segments(template).collect();
        let mut names = HashSet::new();
        let mut segments = Vec::with_capacity(parts.len());

        for (index, part) in parts.iter().enumerate() {
            let segment = parse_segment(template, part)?;
            match &segment {
                Segment::CatchAll(_) if index + 1 != parts.len() => {
                    return Err(Error::configuration(format!(
                        "Catch-all parameter must be the last segment of '{template}'"
                    )));
                }
                Segment::Parameter(name) | Segment::CatchAll(name) => {
                    if !names.insert(name.to_lowercase()) {
                        return Err(Error::configuration(format!(
                            "Parameter '{name}' appears more than once in '{template}'"
                        )));
                    }
                }
                Segment::Literal(_) => {}
            }
            segments.push(segment);
        }

        Ok(Self {
            raw: template.to_string(),
            segments,
        })
    }

    /// The template as written
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the template captures any parameters
    pub fn has_parameters(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| !matches!(segment, Segment::Literal(_)))
    }

    /// Shape of the template with parameter names erased
    ///
    /// Two templates with the same shape match exactly the same paths.
    pub fn shape(&self) -> String {
        let parts: Vec<String> = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(literal) => literal.to_lowercase(),
                Segment::Parameter(_) => "{}".to_string(),
                Segment::CatchAll(_) => "{*}".to_string(),
            })
            .collect();
        format!("/{}", parts.join("/"))
    }

    /// Match `path` and capture its parameters
    ///
    /// Query strings and fragments are ignored.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let parts: Vec<&str> = split_segments(strip_query(path)).collect();
        let mut params = RouteParams::new();

        for (index, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Literal(literal) => {
                    let part = parts.get(index)?;
                    if !part.eq_ignore_ascii_case(literal) {
                        return None;
                    }
                }
                Segment::Parameter(name) => params.insert(name.as_str(), *parts.get(index)?),
                Segment::CatchAll(name) => {
                    let rest = parts.get(index..).unwrap_or_default().join("/");
                    params.insert(name.as_str(), rest);
                    return Some(params);
                }
            }
        }

        (parts.len() == self.segments.len()).then_some(params)
    }
}

impl fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// `path` without its query string and fragment
pub fn strip_query(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|part| !part.is_empty())
}

fn parse_segment(template: &str, part: &str) -> Result<Segment> {
    let invalid = || Error::configuration(format!("Invalid segment '{part}' in '{template}'"));

    let Some(inner) = part.strip_prefix('{') else {
        if part.contains(['{', '}']) {
            return Err(invalid());
        }
        return Ok(Segment::Literal(part.to_string()));
    };
    let inner = inner.strip_suffix('}').ok_or_else(invalid)?;

    let (catch_all, name) = match inner.strip_prefix('*') {
        Some(name) => (true, name),
        None => (false, inner),
    };
    if name.is_empty() || name.contains(['{', '}', '*']) {
        return Err(invalid());
    }

    Ok(if catch_all {
        Segment::CatchAll(name.to_string())
    } else {
        Segment::Parameter(name.to_string())
    })
}
