// SPDX-License-Identifier: PMPL-1.0-or-later
//! Ordered set of enabled criteria.

use crate::criteria::{self, Criterion};
use crate::error::{AuditError, Result};
use tracing::debug;

/// Criteria in registration order. Ids are unique.
#[derive(Default)]
pub struct CriterionRegistry {
    criteria: Vec<Box<dyn Criterion>>,
}

impl CriterionRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-ins in default order
    pub fn with_defaults() -> Self {
        Self {
            criteria: criteria::defaults(),
        }
    }

    /// Registry holding the given built-in ids, in the given order
    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> Result<Self> {
        let mut registry = Self::new();
        for id in ids {
            let id = id.as_ref();
            let criterion =
                criteria::builtin(id).ok_or_else(|| AuditError::UnknownCriterion(id.to_string()))?;
            registry.register(criterion)?;
        }
        Ok(registry)
    }

    /// Add a criterion at the end; fails if its id is already taken
    pub fn register(&mut self, criterion: Box<dyn Criterion>) -> Result<()> {
        if self.contains(criterion.id()) {
            return Err(AuditError::DuplicateCriterion(criterion.id().to_string()));
        }
        debug!(id = criterion.id(), name = criterion.name(), "Registered criterion");
        self.criteria.push(criterion);
        Ok(())
    }

    /// All criteria in registration order
    pub fn list_all(&self) -> &[Box<dyn Criterion>] {
        &self.criteria
    }

    pub fn get(&self, id: &str) -> Option<&dyn Criterion> {
        self.criteria.iter().find(|c| c.id() == id).map(|c| c.as_ref())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl std::fmt::Debug for CriterionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.criteria.iter().map(|c| c.id()))
            .finish()
    }
}
