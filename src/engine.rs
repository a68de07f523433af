// SPDX-License-Identifier: PMPL-1.0-or-later
//! Audit engine: runs every registered criterion against a tree and scores
//! the outcome.
//!
//! Criteria run sequentially in registration order. A criterion that errors
//! or panics is recorded as a [`CriterionFailure`] and counted as not
//! passed; the remaining criteria still run.
//!
//! Containing a panic does not silence it: the process panic hook still runs
//! first, so the default hook prints the panic message to stderr. Hosts that
//! need clean stderr install their own hook with [`std::panic::set_hook`].

use crate::criteria::Criterion;
use crate::dom::DocumentTree;
use crate::error::{AuditError, Result};
use crate::registry::CriterionRegistry;
use crate::result::{
    AuditRecord, AuditResult, CriterionFailure, CriterionOutcome, CriterionStatus, ScorePrecision,
    Violation,
};
use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, info, warn};

/// Run every criterion in `registry` against `tree`.
///
/// Fails only when the registry is empty; individual criterion failures are
/// reported inside the result.
pub fn run_audit(tree: &dyn DocumentTree, registry: &CriterionRegistry) -> Result<AuditResult> {
    let criteria = registry.list_all();
    if criteria.is_empty() {
        return Err(AuditError::EmptyRegistry);
    }

    info!(criteria = criteria.len(), "Starting accessibility audit");

    let mut violations = Vec::new();
    let mut failures = Vec::new();
    let mut outcomes = Vec::with_capacity(criteria.len());

    for criterion in criteria {
        let status = match run_isolated(criterion.as_ref(), tree) {
            Ok(found) if found.is_empty() => {
                debug!(id = criterion.id(), "Criterion passed");
                CriterionStatus::Passed
            }
            Ok(found) => {
                debug!(id = criterion.id(), violations = found.len(), "Criterion failed");
                let count = found.len();
                violations.extend(found);
                CriterionStatus::Failed { violations: count }
            }
            Err(cause) => {
                warn!(id = criterion.id(), %cause, "Criterion could not be evaluated");
                failures.push(CriterionFailure {
                    id: criterion.id().to_string(),
                    cause,
                });
                CriterionStatus::Errored
            }
        };

        outcomes.push(CriterionOutcome {
            id: criterion.id().to_string(),
            name: criterion.name().to_string(),
            level: criterion.level(),
            status,
        });
    }

    let result = AuditResult::new(violations, failures, outcomes);
    info!(
        passed = result.passed_criteria(),
        total = result.total_criteria(),
        violations = result.violations().len(),
        score = result.score(),
        "Audit complete"
    );

    Ok(result)
}

/// Run one check, turning both `Err` and panics into a cause string
fn run_isolated(
    criterion: &dyn Criterion,
    tree: &dyn DocumentTree,
) -> std::result::Result<Vec<Violation>, String> {
    match panic::catch_unwind(AssertUnwindSafe(|| criterion.check(tree))) {
        Ok(Ok(found)) => Ok(found),
        Ok(Err(e)) => Err(format!("{:#}", e)),
        Err(payload) => Err(panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("check panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("check panicked: {}", s)
    } else {
        "check panicked".to_string()
    }
}

/// Engine settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Rounding applied to the score in records and reports
    #[serde(default)]
    pub score_precision: ScorePrecision,
}

/// A registry paired with its settings
#[derive(Debug)]
pub struct AuditEngine {
    registry: CriterionRegistry,
    config: EngineConfig,
}

impl Default for AuditEngine {
    fn default() -> Self {
        Self::new(CriterionRegistry::with_defaults())
    }
}

impl AuditEngine {
    pub fn new(registry: CriterionRegistry) -> Self {
        Self {
            registry,
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(&self) -> &CriterionRegistry {
        &self.registry
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Audit a tree
    pub fn run(&self, tree: &dyn DocumentTree) -> Result<AuditResult> {
        run_audit(tree, &self.registry)
    }

    /// Audit a tree and flatten the result with the configured precision
    pub fn record(&self, tree: &dyn DocumentTree) -> Result<AuditRecord> {
        Ok(self.run(tree)?.to_record(self.config.score_precision))
    }
}
