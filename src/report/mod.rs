// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report generation for audit results.
//!
//! Supports multiple output formats:
//! - Text: score line plus one line per violation
//! - JSON: the plain `{ errors, totalCriteria, passedCriteria, score }` record
//! - SARIF: Static Analysis Results Interchange Format for IDE/CI integration

use crate::result::{AuditResult, CriterionStatus, ScorePrecision};
use serde::Serialize;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI integration
    Sarif,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "sarif" => Ok(OutputFormat::Sarif),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Generate a report from an audit result
pub fn generate_report(
    result: &AuditResult,
    format: OutputFormat,
    precision: ScorePrecision,
) -> String {
    match format {
        OutputFormat::Text => generate_text_report(result),
        OutputFormat::Json => generate_json_report(result, precision),
        OutputFormat::Sarif => generate_sarif_report(result),
    }
}

/// Generate human-readable text report
fn generate_text_report(result: &AuditResult) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Score: {:.0}% ({}/{} criteria)\n\n",
        result.score(),
        result.passed_criteria(),
        result.total_criteria()
    ));

    for outcome in result.outcomes() {
        let status = match outcome.status {
            CriterionStatus::Passed => "pass".to_string(),
            CriterionStatus::Failed { violations } => format!("FAIL ({})", violations),
            CriterionStatus::Errored => "ERROR".to_string(),
        };
        output.push_str(&format!(
            "  [{}] {} {} (Level {})\n",
            status, outcome.id, outcome.name, outcome.level
        ));
    }
    output.push('\n');

    if result.violations().is_empty() {
        output.push_str("No errors found in the checked criteria.\n");
    } else {
        for violation in result.violations() {
            output.push_str(&format!("- {}\n", violation));
        }
    }

    for failure in result.failures() {
        output.push_str(&format!("! {}\n", failure));
    }

    output.push('\n');
    if result.is_perfect() {
        output.push_str("RESULT: PASS\n");
    } else {
        output.push_str("RESULT: FAIL\n");
    }

    output
}

/// Generate JSON report
fn generate_json_report(result: &AuditResult, precision: ScorePrecision) -> String {
    serde_json::to_string_pretty(&result.to_record(precision)).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize audit record: {}\"}}", e)
    })
}

/// SARIF report structure (simplified)
#[derive(Debug, Serialize)]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Debug, Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Debug, Serialize)]
struct SarifDriver {
    name: String,
    version: String,
    rules: Vec<SarifRule>,
}

#[derive(Debug, Serialize)]
struct SarifRule {
    id: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: String,
    message: SarifMessage,
}

#[derive(Debug, Serialize)]
struct SarifMessage {
    text: String,
}

/// Generate SARIF report
fn generate_sarif_report(result: &AuditResult) -> String {
    let rules = result
        .outcomes()
        .iter()
        .map(|o| SarifRule {
            id: o.id.clone(),
            name: o.name.clone(),
        })
        .collect();

    let mut results: Vec<SarifResult> = result
        .violations()
        .iter()
        .map(|v| SarifResult {
            rule_id: v.criterion_id().to_string(),
            level: "error".to_string(),
            message: SarifMessage {
                text: v.description().to_string(),
            },
        })
        .collect();

    results.extend(result.failures().iter().map(|f| SarifResult {
        rule_id: f.id.clone(),
        level: "note".to_string(),
        message: SarifMessage {
            text: f.to_string(),
        },
    }));

    let report = SarifReport {
        schema: "https://json.schemastore.org/sarif-2.1.0.json".to_string(),
        version: "2.1.0".to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: "a11yscore".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    rules,
                },
            },
            results,
        }],
    };

    serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize SARIF report: {}\"}}", e)
    })
}
