// SPDX-License-Identifier: PMPL-1.0-or-later
//! In-memory document tree.
//!
//! Lets hosts and tests describe a page directly as nested elements,
//! without going through an HTML parser.

use super::{DocumentTree, ElementNode, ElementQuery};

/// An element together with its children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryElement {
    node: ElementNode,
    children: Vec<MemoryElement>,
}

impl MemoryElement {
    pub fn new(node: ElementNode) -> Self {
        Self {
            node,
            children: Vec::new(),
        }
    }

    /// Append a child element
    pub fn with_child(mut self, child: impl Into<MemoryElement>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn node(&self) -> &ElementNode {
        &self.node
    }

    pub fn children(&self) -> &[MemoryElement] {
        &self.children
    }

    /// Pre-order walk: self first, then each child subtree in order
    fn collect_matching(&self, query: &ElementQuery, out: &mut Vec<ElementNode>) {
        if query.matches(&self.node) {
            out.push(self.node.clone());
        }
        for child in &self.children {
            child.collect_matching(query, out);
        }
    }
}

impl From<ElementNode> for MemoryElement {
    fn from(node: ElementNode) -> Self {
        MemoryElement::new(node)
    }
}

/// Document whose root is an `<html>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryDocument {
    root: MemoryElement,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Empty document: a bare `<html>` root with no attributes
    pub fn new() -> Self {
        Self {
            root: MemoryElement::new(ElementNode::new("html")),
        }
    }

    /// Use an arbitrary root element
    pub fn from_root(root: MemoryElement) -> Self {
        Self { root }
    }

    /// Set the root element's `lang` attribute
    pub fn with_lang(mut self, lang: &str) -> Self {
        self.root.node.set_attr("lang", lang);
        self
    }

    /// Append an element (or subtree) under the root
    pub fn with_element(mut self, element: impl Into<MemoryElement>) -> Self {
        self.root.children.push(element.into());
        self
    }

    pub fn root(&self) -> &MemoryElement {
        &self.root
    }
}

impl DocumentTree for MemoryDocument {
    fn root_lang(&self) -> Option<String> {
        self.root.node.lang().map(str::to_string)
    }

    fn select(&self, query: &ElementQuery) -> anyhow::Result<Vec<ElementNode>> {
        let mut out = Vec::new();
        self.root.collect_matching(query, &mut out);
        Ok(out)
    }
}
