// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessibility criteria.
//!
//! Each criterion is an independent, stateless check over a
//! [`DocumentTree`]. Criteria never see each other's output; the engine
//! only aggregates what they return.

pub mod alt_text;
pub mod keyboard;
pub mod language;

use crate::dom::DocumentTree;
use crate::result::{Violation, WcagLevel};

/// Ids of the built-in criteria, in their default order
pub const BUILTIN_IDS: &[&str] = &[language::ID, alt_text::ID, keyboard::ID];

/// Trait implemented by all criteria
pub trait Criterion: Send + Sync {
    /// Unique id, e.g. "3.1.1"
    fn id(&self) -> &str;

    /// Human-readable label
    fn name(&self) -> &str;

    /// Short description of what this criterion checks
    fn description(&self) -> &str;

    /// WCAG conformance level this criterion belongs to
    fn level(&self) -> WcagLevel {
        WcagLevel::A
    }

    /// Inspect the tree and report every violation found.
    ///
    /// An `Err` means the check itself could not run; missing or malformed
    /// attributes are violations, not errors.
    fn check(&self, tree: &dyn DocumentTree) -> anyhow::Result<Vec<Violation>>;
}

/// Look up a built-in criterion by id
pub fn builtin(id: &str) -> Option<Box<dyn Criterion>> {
    match id {
        language::ID => Some(Box::new(language::LanguageCriterion)),
        alt_text::ID => Some(Box::new(alt_text::AltTextCriterion)),
        keyboard::ID => Some(Box::new(keyboard::KeyboardCriterion)),
        _ => None,
    }
}

/// The three built-ins in default order: 3.1.1, 1.1.1, 2.1.1
pub fn defaults() -> Vec<Box<dyn Criterion>> {
    vec![
        Box::new(language::LanguageCriterion),
        Box::new(alt_text::AltTextCriterion),
        Box::new(keyboard::KeyboardCriterion),
    ]
}

type CheckFn = dyn Fn(&dyn DocumentTree) -> anyhow::Result<Vec<Violation>> + Send + Sync;

/// A criterion defined by a closure
pub struct FnCriterion {
    id: String,
    name: String,
    description: String,
    level: WcagLevel,
    check_fn: Box<CheckFn>,
}

impl FnCriterion {
    pub fn new<F>(id: &str, name: &str, check_fn: F) -> Self
    where
        F: Fn(&dyn DocumentTree) -> anyhow::Result<Vec<Violation>> + Send + Sync + 'static,
    {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            level: WcagLevel::A,
            check_fn: Box::new(check_fn),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_level(mut self, level: WcagLevel) -> Self {
        self.level = level;
        self
    }
}

impl Criterion for FnCriterion {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn level(&self) -> WcagLevel {
        self.level
    }

    fn check(&self, tree: &dyn DocumentTree) -> anyhow::Result<Vec<Violation>> {
        (self.check_fn)(tree)
    }
}

impl std::fmt::Debug for FnCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCriterion")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}
