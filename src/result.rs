// SPDX-License-Identifier: PMPL-1.0-or-later
//! Audit result data model.
//!
//! Everything here is a plain value: built once by the engine, never
//! mutated afterwards, and carrying no timestamps or ids, so two audits of
//! the same tree compare equal.

use serde::{Deserialize, Serialize};

/// WCAG conformance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Level A - minimum conformance
    A,
    /// Level AA - standard conformance
    AA,
    /// Level AAA - enhanced conformance
    AAA,
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WcagLevel::A => write!(f, "A"),
            WcagLevel::AA => write!(f, "AA"),
            WcagLevel::AAA => write!(f, "AAA"),
        }
    }
}

/// One reported instance of a criterion failing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    criterion_id: String,
    description: String,
}

impl Violation {
    pub fn new(criterion_id: &str, description: impl Into<String>) -> Self {
        Self {
            criterion_id: criterion_id.to_string(),
            description: description.into(),
        }
    }

    /// Id of the criterion that produced this violation (e.g. "1.1.1")
    pub fn criterion_id(&self) -> &str {
        &self.criterion_id
    }

    /// Human-readable message
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}

/// A criterion whose check could not run to completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionFailure {
    /// Criterion id
    pub id: String,
    /// Error message or panic payload
    pub cause: String,
}

impl std::fmt::Display for CriterionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Criterion {} could not be evaluated: {}", self.id, self.cause)
    }
}

/// How a single criterion fared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "status")]
pub enum CriterionStatus {
    Passed,
    Failed { violations: usize },
    Errored,
}

impl CriterionStatus {
    pub fn is_passed(&self) -> bool {
        matches!(self, CriterionStatus::Passed)
    }
}

/// Per-criterion summary, in registration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionOutcome {
    pub id: String,
    pub name: String,
    pub level: WcagLevel,
    #[serde(flatten)]
    pub status: CriterionStatus,
}

/// Rounding applied when a score leaves the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorePrecision {
    /// Full `f64` ratio
    #[default]
    Exact,
    /// Whole percent
    Integer,
    /// One decimal place
    OneDecimal,
}

impl ScorePrecision {
    pub fn apply(self, score: f64) -> f64 {
        match self {
            ScorePrecision::Exact => score,
            ScorePrecision::Integer => score.round(),
            ScorePrecision::OneDecimal => (score * 10.0).round() / 10.0,
        }
    }
}

impl std::str::FromStr for ScorePrecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "exact" => Ok(ScorePrecision::Exact),
            "integer" => Ok(ScorePrecision::Integer),
            "one_decimal" => Ok(ScorePrecision::OneDecimal),
            other => Err(format!("Unknown score precision: {}", other)),
        }
    }
}

/// Outcome of one audit run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditResult {
    violations: Vec<Violation>,
    failures: Vec<CriterionFailure>,
    outcomes: Vec<CriterionOutcome>,
    total_criteria: usize,
    passed_criteria: usize,
    score: f64,
}

impl AuditResult {
    /// Assemble a result from per-criterion outcomes. `total_criteria` must be
    /// non-zero; the engine rejects empty registries before getting here.
    pub(crate) fn new(
        violations: Vec<Violation>,
        failures: Vec<CriterionFailure>,
        outcomes: Vec<CriterionOutcome>,
    ) -> Self {
        let total_criteria = outcomes.len();
        let passed_criteria = outcomes.iter().filter(|o| o.status.is_passed()).count();
        let score = passed_criteria as f64 / total_criteria as f64 * 100.0;

        Self {
            violations,
            failures,
            outcomes,
            total_criteria,
            passed_criteria,
            score,
        }
    }

    /// Violations in registration order, then per-criterion order
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Criteria that errored or panicked instead of producing violations
    pub fn failures(&self) -> &[CriterionFailure] {
        &self.failures
    }

    pub fn outcomes(&self) -> &[CriterionOutcome] {
        &self.outcomes
    }

    pub fn total_criteria(&self) -> usize {
        self.total_criteria
    }

    pub fn passed_criteria(&self) -> usize {
        self.passed_criteria
    }

    /// `passed / total * 100`, unrounded
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Whether every criterion passed
    pub fn is_perfect(&self) -> bool {
        self.passed_criteria == self.total_criteria
    }

    /// Violations produced by one criterion
    pub fn violations_for(&self, criterion_id: &str) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.criterion_id() == criterion_id)
            .collect()
    }

    /// Flatten into the plain record handed to hosts
    pub fn to_record(&self, precision: ScorePrecision) -> AuditRecord {
        AuditRecord {
            errors: self.violations.iter().map(|v| v.description().to_string()).collect(),
            total_criteria: self.total_criteria,
            passed_criteria: self.passed_criteria,
            score: precision.apply(self.score),
            failures: self.failures.clone(),
        }
    }
}

/// `{ errors, totalCriteria, passedCriteria, score }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    pub errors: Vec<String>,
    pub total_criteria: usize,
    pub passed_criteria: usize,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<CriterionFailure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(id: &str, status: CriterionStatus) -> CriterionOutcome {
        CriterionOutcome {
            id: id.to_string(),
            name: id.to_string(),
            level: WcagLevel::A,
            status,
        }
    }

    #[test]
    fn test_score_from_outcomes() {
        let result = AuditResult::new(
            vec![
                Violation::new("1.1.1", "first"),
                Violation::new("1.1.1", "second"),
            ],
            Vec::new(),
            vec![
                outcome("3.1.1", CriterionStatus::Passed),
                outcome("1.1.1", CriterionStatus::Failed { violations: 2 }),
                outcome("2.1.1", CriterionStatus::Passed),
            ],
        );
        assert_eq!(result.total_criteria(), 3);
        assert_eq!(result.passed_criteria(), 2);
        assert_eq!(result.score(), 2.0 / 3.0 * 100.0);
        assert_eq!(result.violations_for("1.1.1").len(), 2);
        assert!(!result.is_perfect());
    }

    #[test]
    fn test_precision() {
        let score = 200.0 / 3.0;
        assert_eq!(ScorePrecision::Integer.apply(score), 67.0);
        assert_eq!(ScorePrecision::OneDecimal.apply(score), 66.7);
        assert_eq!(ScorePrecision::Exact.apply(score), score);
    }

    #[test]
    fn test_precision_parse() {
        assert_eq!("one-decimal".parse::<ScorePrecision>().unwrap(), ScorePrecision::OneDecimal);
        assert_eq!("INTEGER".parse::<ScorePrecision>().unwrap(), ScorePrecision::Integer);
        assert!("half".parse::<ScorePrecision>().is_err());
    }

    #[test]
    fn test_record_keys_are_camel_case() {
        let result = AuditResult::new(
            vec![Violation::new("3.1.1", "no lang")],
            Vec::new(),
            vec![outcome("3.1.1", CriterionStatus::Failed { violations: 1 })],
        );
        let json = serde_json::to_value(result.to_record(ScorePrecision::Integer)).unwrap();
        assert_eq!(json["errors"][0], "no lang");
        assert_eq!(json["totalCriteria"], 1);
        assert_eq!(json["passedCriteria"], 0);
        assert_eq!(json["score"], 0.0);
        assert!(json.get("failures").is_none());
    }
}
