// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text - WCAG 1.1.1 Non-text Content (Level A)
//!
//! Every `<img>` must carry an `alt` attribute. An empty `alt=""` is the
//! accepted way to mark an image as decorative, so only a missing attribute
//! is reported. Each offending image yields its own violation.

use crate::criteria::Criterion;
use crate::dom::{DocumentTree, ElementQuery};
use crate::result::Violation;
use crate::text::{or_placeholder, truncate};
use tracing::trace;

pub const ID: &str = "1.1.1";

/// Longest image source quoted verbatim in a message
pub const MAX_SRC_LEN: usize = 50;

/// Non-text Content criterion
pub struct AltTextCriterion;

impl Criterion for AltTextCriterion {
    fn id(&self) -> &str {
        ID
    }

    fn name(&self) -> &str {
        "Non-text Content"
    }

    fn description(&self) -> &str {
        "Checks <img> elements for an alt attribute (WCAG 1.1.1)"
    }

    fn check(&self, tree: &dyn DocumentTree) -> anyhow::Result<Vec<Violation>> {
        let images = tree.select(&ElementQuery::tag("img"))?;
        trace!(images = images.len(), "Checking image alt attributes");

        let violations = images
            .iter()
            .filter(|img| !img.has_attr("alt"))
            .map(|img| {
                let src = truncate(img.src().unwrap_or("").trim(), MAX_SRC_LEN);
                Violation::new(
                    ID,
                    format!(
                        "Criterion 1.1.1 (Non-text Content): The image (src: {}) does not have an 'alt' attribute.",
                        or_placeholder(&src)
                    ),
                )
            })
            .collect();

        Ok(violations)
    }
}
