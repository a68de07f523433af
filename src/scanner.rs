// SPDX-License-Identifier: PMPL-1.0-or-later
//! Host-side entry points: load one HTML document and audit it.
//!
//! The engine itself never touches the filesystem; this module is the
//! offline stand-in for a browser handing over its live page.

use crate::config::Config;
use crate::dom::html::HtmlDocument;
use crate::result::AuditResult;
use anyhow::Context;
use std::path::Path;
use tracing::info;

/// Parse `content` using the configured base URL, if any
pub fn parse_document(content: &str, config: &Config) -> anyhow::Result<HtmlDocument> {
    let doc = match config.base_url()? {
        Some(base) => HtmlDocument::parse_with_base(content, base),
        None => HtmlDocument::parse(content),
    };
    Ok(doc)
}

/// Audit an HTML string with the configured criteria
pub fn audit_html(content: &str, config: &Config) -> anyhow::Result<AuditResult> {
    let engine = config.engine()?;
    let doc = parse_document(content, config)?;
    Ok(engine.run(&doc)?)
}

/// Audit a single HTML file
pub fn audit_file(path: &Path, config: &Config) -> anyhow::Result<AuditResult> {
    info!("Auditing {}", path.display());
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    audit_html(&content, config).with_context(|| format!("failed to audit {}", path.display()))
}
