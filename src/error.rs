// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for a11yscore

use thiserror::Error;

/// Main error type for a11yscore
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Criterion {0} is already registered")]
    DuplicateCriterion(String),

    #[error("No criteria registered; an audit needs at least one criterion to score")]
    EmptyRegistry,

    #[error("Unknown criterion id: {0}")]
    UnknownCriterion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, AuditError>;
