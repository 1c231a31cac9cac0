//! Render tree

use std::fmt::Write;

/// One node of a render tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderNode {
    /// An element with attributes and children
    Element(Element),
    /// Escaped text content
    Text(String),
}

/// An element node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<RenderNode>,
}

impl Element {
    /// Create an empty `<tag>` element
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a text child
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(RenderNode::Text(text.into()));
        self
    }

    /// Append an element child
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(RenderNode::Element(child));
        self
    }

    /// Append every node of `tree`
    pub fn content(mut self, tree: RenderTree) -> Self {
        self.children.extend(tree.nodes);
        self
    }

    /// Tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Value of attribute `name`
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child nodes
    pub fn children(&self) -> &[RenderNode] {
        &self.children
    }
}

/// Output of a component render pass
///
/// Built bottom-up by components and serialized to HTML by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderTree {
    nodes: Vec<RenderNode>,
}

impl RenderTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element
    pub fn push(&mut self, element: Element) -> &mut Self {
        self.nodes.push(RenderNode::Element(element));
        self
    }

    /// Append a text node
    pub fn push_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.nodes.push(RenderNode::Text(text.into()));
        self
    }

    /// Top-level nodes
    pub fn nodes(&self) -> &[RenderNode] {
        &self.nodes
    }

    /// Whether nothing was rendered
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Concatenated text of every node, without markup
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.nodes, &mut out);
        out
    }

    /// Serialize to HTML, escaping text and attribute values
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_nodes(&self.nodes, &mut out);
        out
    }
}

fn collect_text(nodes: &[RenderNode], out: &mut String) {
    for node in nodes {
        match node {
            RenderNode::Text(text) => out.push_str(text),
            RenderNode::Element(element) => collect_text(&element.children, out),
        }
    }
}

fn write_nodes(nodes: &[RenderNode], out: &mut String) {
    for node in nodes {
        match node {
            RenderNode::Text(text) => out.push_str(&escape(text)),
            RenderNode::Element(element) => {
                out.push('<');
                out.push_str(&element.tag);
                for (name, value) in &element.attributes {
                    // Writing to a String cannot fail
                    let _ = write!(out, " {}=\"{}\"", name, escape(value));
                }
                out.push('>');
                write_nodes(&element.children, out);
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }
}

/// Escape `&`, `<`, `>`, `"` and `'`
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
