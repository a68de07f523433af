// SPDX-License-Identifier: PMPL-1.0-or-later
//! Parsed HTML document backed by `scraper`.

use super::{DocumentTree, ElementNode, ElementQuery};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

/// An offline HTML document, optionally anchored at a base URL.
///
/// With a base URL, relative `img src` values are resolved to absolute URLs,
/// the way a browser reports an image's `src` property.
pub struct HtmlDocument {
    html: Html,
    base_url: Option<Url>,
}

impl HtmlDocument {
    /// Parse a full HTML document. Parsing is lenient and never fails;
    /// a missing `<html>` element is synthesized by the parser.
    pub fn parse(content: &str) -> Self {
        Self {
            html: Html::parse_document(content),
            base_url: None,
        }
    }

    /// Parse a document and resolve image sources against `base_url`
    pub fn parse_with_base(content: &str, base_url: Url) -> Self {
        Self {
            html: Html::parse_document(content),
            base_url: Some(base_url),
        }
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    fn snapshot(&self, el: ElementRef<'_>) -> ElementNode {
        let value = el.value();
        let mut node = ElementNode::new(value.name());
        for (name, attr_value) in value.attrs() {
            node.set_attr(name, attr_value);
        }

        if node.tag_name() == "img" {
            if let Some(resolved) = self.resolve_src(node.src()) {
                node.set_attr("src", &resolved);
            }
        }

        node
    }

    fn resolve_src(&self, src: Option<&str>) -> Option<String> {
        let base = self.base_url.as_ref()?;
        let src = src.map(str::trim).filter(|s| !s.is_empty())?;
        match base.join(src) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                debug!("Leaving unresolvable image src {:?} as-is: {}", src, e);
                None
            }
        }
    }
}

impl DocumentTree for HtmlDocument {
    fn root_lang(&self) -> Option<String> {
        self.html
            .root_element()
            .value()
            .attr("lang")
            .map(str::to_string)
    }

    fn select(&self, query: &ElementQuery) -> anyhow::Result<Vec<ElementNode>> {
        if query.tag_names().is_empty() {
            return Ok(Vec::new());
        }

        let css = query.to_css();
        let selector = Selector::parse(&css)
            .map_err(|e| anyhow::anyhow!("invalid selector {:?}: {}", css, e))?;

        Ok(self
            .html
            .select(&selector)
            .filter(|el| !in_template(*el))
            .map(|el| self.snapshot(el))
            .collect())
    }
}

/// Whether the element sits inside a `<template>`, whose content is inert
/// and never rendered.
fn in_template(el: ElementRef<'_>) -> bool {
    el.ancestors().any(|node| {
        node.value()
            .as_element()
            .map_or(false, |e| e.name() == "template")
    })
}
