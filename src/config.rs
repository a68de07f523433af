// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration handling for a11yscore

use crate::criteria::BUILTIN_IDS;
use crate::engine::{AuditEngine, EngineConfig};
use crate::error::{AuditError, Result};
use crate::registry::CriterionRegistry;
use crate::result::ScorePrecision;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Criterion ids to run, in order
    #[serde(default = "default_criteria")]
    pub criteria: Vec<String>,

    /// Rounding applied to reported scores
    #[serde(default)]
    pub score_precision: ScorePrecision,

    /// Base URL used to resolve relative image sources
    #[serde(default)]
    pub base_url: Option<String>,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            criteria: default_criteria(),
            score_precision: ScorePrecision::default(),
            base_url: None,
            log: LogConfig::default(),
        }
    }
}

fn default_criteria() -> Vec<String> {
    BUILTIN_IDS.iter().map(|id| id.to_string()).collect()
}

impl Config {
    /// Build a registry holding the configured criteria
    pub fn registry(&self) -> Result<CriterionRegistry> {
        CriterionRegistry::from_ids(self.criteria.as_slice())
    }

    /// Build an engine from the configured criteria and precision
    pub fn engine(&self) -> Result<AuditEngine> {
        Ok(AuditEngine::new(self.registry()?).with_config(EngineConfig {
            score_precision: self.score_precision,
        }))
    }

    /// Parsed base URL, if one is configured
    pub fn base_url(&self) -> Result<Option<Url>> {
        self.base_url
            .as_deref()
            .map(Url::parse)
            .transpose()
            .map_err(AuditError::from)
    }

    /// Check the configuration without running anything
    pub fn validate(&self) -> Result<()> {
        if self.criteria.is_empty() {
            return Err(AuditError::Config(
                "at least one criterion must be enabled".to_string(),
            ));
        }
        self.registry()?;
        self.base_url()?;
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (pretty, compact, json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|e| e == "toml").unwrap_or(false)
}

/// Load configuration from a path
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("Config file not found at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;

    let config: Config = if is_toml(path) {
        toml::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };

    config.validate()?;
    debug!(?config, "Loaded configuration");
    Ok(config)
}

/// Get the default config path
pub fn default_config_path() -> PathBuf {
    PathBuf::from(".a11yscore.toml")
}

/// Write default configuration to a file
pub fn write_default_config(path: &Path) -> Result<()> {
    let config = Config::default();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = if is_toml(path) {
        toml::to_string_pretty(&config).map_err(|e| AuditError::Config(e.to_string()))?
    } else {
        serde_yaml::to_string(&config)?
    };

    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.criteria, vec!["3.1.1", "1.1.1", "2.1.1"]);
        assert_eq!(config.score_precision, ScorePrecision::Exact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_partial() {
        let config: Config = toml::from_str("score_precision = \"integer\"\ncriteria = [\"1.1.1\"]\n").unwrap();
        assert_eq!(config.score_precision, ScorePrecision::Integer);
        assert_eq!(config.registry().unwrap().len(), 1);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_yaml() {
        let config: Config = serde_yaml::from_str("score_precision: one_decimal\nbase_url: https://example.org/\n").unwrap();
        assert_eq!(config.score_precision, ScorePrecision::OneDecimal);
        assert_eq!(config.criteria.len(), 3);
        assert_eq!(config.base_url().unwrap().unwrap().as_str(), "https://example.org/");
    }

    #[test]
    fn test_validate_rejects_empty_and_unknown() {
        let mut config = Config::default();
        config.criteria.clear();
        assert!(matches!(config.validate(), Err(AuditError::Config(_))));

        config.criteria = vec!["1.4.3".to_string()];
        assert!(matches!(config.validate(), Err(AuditError::UnknownCriterion(_))));
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = Config {
            base_url: Some("not a url".to_string()),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AuditError::Url(_))));
    }
}
