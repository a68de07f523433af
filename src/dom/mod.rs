// SPDX-License-Identifier: PMPL-1.0-or-later
//! Read-only document model consumed by the criteria.
//!
//! A [`DocumentTree`] is whatever the host hands over: a parsed offline HTML
//! file ([`html::HtmlDocument`]), a synthetic tree built in memory
//! ([`memory::MemoryDocument`]), or a bridge to a live page. Criteria only
//! ever see owned [`ElementNode`] snapshots, so a tree never has to expose
//! its internal node type.

pub mod html;
pub mod memory;

use std::collections::BTreeMap;

/// Read-only view of a page's element structure.
pub trait DocumentTree {
    /// The `lang` attribute declared on the root element, if any.
    ///
    /// An attribute that is present but empty is returned as `Some("")`;
    /// deciding whether that is valid is the caller's business.
    fn root_lang(&self) -> Option<String>;

    /// All elements matching `query`, in document order.
    fn select(&self, query: &ElementQuery) -> anyhow::Result<Vec<ElementNode>>;
}

/// Predicate over elements: tag name in a set, optionally requiring an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementQuery {
    tags: Vec<String>,
    required_attr: Option<String>,
}

impl ElementQuery {
    /// Match any element whose tag is in `tags` (case-insensitive)
    pub fn tags(tags: &[&str]) -> Self {
        Self {
            tags: tags.iter().map(|t| t.to_ascii_lowercase()).collect(),
            required_attr: None,
        }
    }

    /// Match a single tag
    pub fn tag(tag: &str) -> Self {
        Self::tags(&[tag])
    }

    /// Additionally require `attr` to be present (any value, including empty)
    pub fn with_attr(mut self, attr: &str) -> Self {
        self.required_attr = Some(attr.to_ascii_lowercase());
        self
    }

    /// Lower-cased tag names this query accepts
    pub fn tag_names(&self) -> &[String] {
        &self.tags
    }

    /// Attribute that must be present, if any
    pub fn required_attr(&self) -> Option<&str> {
        self.required_attr.as_deref()
    }

    /// Whether an element with this tag and attribute lookup matches
    pub fn matches(&self, node: &ElementNode) -> bool {
        self.tags.iter().any(|t| t == node.tag_name())
            && self
                .required_attr
                .as_deref()
                .map_or(true, |attr| node.has_attr(attr))
    }

    /// CSS selector list equivalent, e.g. `div[onclick], span[onclick]`
    pub fn to_css(&self) -> String {
        self.tags
            .iter()
            .map(|tag| match &self.required_attr {
                Some(attr) => format!("{}[{}]", tag, attr),
                None => tag.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Owned snapshot of one element: tag name and attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    tag: String,
    attrs: BTreeMap<String, String>,
}

impl ElementNode {
    /// Create a node with no attributes; the tag is stored lower-case
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: BTreeMap::new(),
        }
    }

    /// Builder-style attribute setter; attribute names are stored lower-case
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set or replace an attribute
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_ascii_lowercase(), value.to_string());
    }

    /// Lower-case tag name, e.g. `div`
    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    /// Attribute value, `None` when the attribute is absent
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// Whether the attribute is declared at all
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    pub fn lang(&self) -> Option<&str> {
        self.attr("lang")
    }

    pub fn alt(&self) -> Option<&str> {
        self.attr("alt")
    }

    pub fn tabindex(&self) -> Option<&str> {
        self.attr("tabindex")
    }

    pub fn role(&self) -> Option<&str> {
        self.attr("role")
    }

    pub fn src(&self) -> Option<&str> {
        self.attr("src")
    }

    /// All attributes in name order
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_css() {
        let q = ElementQuery::tags(&["div", "span"]).with_attr("onclick");
        assert_eq!(q.to_css(), "div[onclick], span[onclick]");
        assert_eq!(ElementQuery::tag("img").to_css(), "img");
    }

    #[test]
    fn test_query_matches() {
        let q = ElementQuery::tags(&["DIV"]).with_attr("onclick");
        let clickable = ElementNode::new("div").with_attr("onclick", "");
        let plain = ElementNode::new("div");
        let button = ElementNode::new("button").with_attr("onclick", "go()");
        assert!(q.matches(&clickable));
        assert!(!q.matches(&plain));
        assert!(!q.matches(&button));
    }

    #[test]
    fn test_attribute_lookup_is_case_insensitive() {
        let node = ElementNode::new("IMG").with_attr("SRC", "a.png");
        assert_eq!(node.tag_name(), "img");
        assert_eq!(node.src(), Some("a.png"));
        assert_eq!(node.attr("Src"), Some("a.png"));
        assert!(node.alt().is_none());
    }

    #[test]
    fn test_empty_attribute_is_present() {
        let node = ElementNode::new("img").with_attr("alt", "");
        assert!(node.has_attr("alt"));
        assert_eq!(node.alt(), Some(""));
    }
}
