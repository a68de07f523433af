// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page Language - WCAG 3.1.1 (Level A)
//!
//! The root element must declare a non-blank `lang` attribute so assistive
//! technology can pick the right pronunciation rules. This is a
//! document-level check: it reports at most one violation.

use crate::criteria::Criterion;
use crate::dom::DocumentTree;
use crate::result::Violation;

pub const ID: &str = "3.1.1";

/// Page Language criterion
pub struct LanguageCriterion;

impl Criterion for LanguageCriterion {
    fn id(&self) -> &str {
        ID
    }

    fn name(&self) -> &str {
        "Page Language"
    }

    fn description(&self) -> &str {
        "Checks that the root element declares a language (WCAG 3.1.1)"
    }

    fn check(&self, tree: &dyn DocumentTree) -> anyhow::Result<Vec<Violation>> {
        let declared = tree
            .root_lang()
            .map_or(false, |lang| !lang.trim().is_empty());

        if declared {
            return Ok(Vec::new());
        }

        Ok(vec![Violation::new(
            ID,
            "Criterion 3.1.1 (Page Language): The <html> element does not have a valid 'lang' attribute.",
        )])
    }
}
