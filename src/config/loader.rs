//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! payroll configuration from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{JurisdictionMetadata, StatutoryConfig, StatutoryRules};

/// Loads and provides access to statutory configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides access to the dated rule sets for a jurisdiction.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/demo/
/// ├── jurisdiction.yaml    # Jurisdiction metadata
/// └── rules/
///     └── 2025-01-01.yaml  # Rules effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/demo").unwrap();
///
/// let pay_date = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
/// let rules = loader.rules_for(pay_date).unwrap();
/// println!("Minimum wage: {}", rules.compliance.minimum_monthly_wage);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StatutoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/demo")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata_path = path.join("jurisdiction.yaml");
        let metadata = Self::load_yaml::<JurisdictionMetadata>(&metadata_path)?;

        let rules_dir = path.join("rules");
        let rules = Self::load_rules(&rules_dir)?;

        Ok(Self {
            config: StatutoryConfig::new(metadata, rules),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rule files from the rules directory.
    fn load_rules(rules_dir: &Path) -> EngineResult<Vec<StatutoryRules>> {
        let rules_dir_str = rules_dir.display().to_string();

        if !rules_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: rules_dir_str,
            });
        }

        let entries = fs::read_dir(rules_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rules_dir_str.clone(),
        })?;

        let mut rules = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rules_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let rule_set = Self::load_yaml::<StatutoryRules>(&path)?;
                rules.push(rule_set);
            }
        }

        if rules.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rule files found)", rules_dir_str),
            });
        }

        Ok(rules)
    }

    /// Returns the underlying statutory configuration.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        self.config.jurisdiction()
    }

    /// Returns the rule set effective for the given pay date.
    ///
    /// Finds the most recent rule set whose effective date is on or before
    /// the given date, or `RulesNotFound` if none applies.
    pub fn rules_for(&self, date: NaiveDate) -> EngineResult<&StatutoryRules> {
        self.config
            .rules()
            .iter()
            .rev()
            .find(|r| r.effective_date <= date)
            .ok_or(EngineError::RulesNotFound { date })
    }
}
