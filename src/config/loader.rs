//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax brackets
//! and payroll rules from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::calculation::TaxSchedule;
use crate::error::{EngineError, EngineResult};

use super::types::{BracketsConfig, PayrollRules};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// compiles the bracket table into a [`TaxSchedule`] with cumulative offsets
/// derived from the configured thresholds and marginal rates.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/ato/
/// ├── brackets.yaml   # Tax bracket thresholds and marginal rates
/// └── payroll.yaml    # Superannuation rate, pay cycle, iteration policy
/// ```
///
/// # Example
///
/// ```no_run
/// use payslip_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ato").unwrap();
/// println!("Brackets for FY {}", loader.financial_year());
/// println!("Super rate: {}", loader.rules().super_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    brackets: BracketsConfig,
    rules: PayrollRules,
    schedule: TaxSchedule,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/ato")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either required file is missing
    /// - Either file contains invalid YAML
    /// - The bracket table or payroll rules fail validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let brackets_path = path.join("brackets.yaml");
        let brackets = Self::load_yaml::<BracketsConfig>(&brackets_path)?;
        Self::validate_brackets(&brackets, &brackets_path)?;

        let payroll_path = path.join("payroll.yaml");
        let rules = Self::load_yaml::<PayrollRules>(&payroll_path)?;
        Self::validate_rules(&rules, &payroll_path)?;

        let marginal_rates: Vec<(Decimal, Decimal)> = brackets
            .brackets
            .iter()
            .map(|b| (b.threshold, b.rate))
            .collect();
        let schedule = TaxSchedule::from_marginal_rates(&marginal_rates);

        Ok(Self {
            brackets,
            rules,
            schedule,
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

    /// Validates the bracket table: non-empty, zero-based, strictly ascending
    /// thresholds, non-negative rates.
    fn validate_brackets(config: &BracketsConfig, path: &Path) -> EngineResult<()> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        let first = config
            .brackets
            .first()
            .ok_or_else(|| parse_error("bracket table is empty".to_string()))?;

        if first.threshold != Decimal::ZERO {
            return Err(parse_error(format!(
                "first bracket threshold must be 0, got {}",
                first.threshold
            )));
        }

        for pair in config.brackets.windows(2) {
            if pair[1].threshold <= pair[0].threshold {
                return Err(parse_error(format!(
                    "bracket thresholds must be strictly ascending ({} follows {})",
                    pair[1].threshold, pair[0].threshold
                )));
            }
        }

        for bracket in &config.brackets {
            if bracket.rate < Decimal::ZERO {
                return Err(parse_error(format!(
                    "bracket rate must not be negative, got {}",
                    bracket.rate
                )));
            }
        }

        Ok(())
    }

    /// Validates the payroll rules: super rate within [0, 1] and at least one
    /// pay period per year.
    fn validate_rules(rules: &PayrollRules, path: &Path) -> EngineResult<()> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        if rules.super_rate < Decimal::ZERO || rules.super_rate > Decimal::ONE {
            return Err(parse_error(format!(
                "super_rate must be between 0 and 1, got {}",
                rules.super_rate
            )));
        }

        if rules.pay_periods_per_year == 0 {
            return Err(parse_error(
                "pay_periods_per_year must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns the compiled tax schedule.
    pub fn schedule(&self) -> &TaxSchedule {
        &self.schedule
    }

    /// Returns the payroll rules.
    pub fn rules(&self) -> &PayrollRules {
        &self.rules
    }

    /// Returns the financial year the bracket table applies to.
    pub fn financial_year(&self) -> &str {
        &self.brackets.financial_year
    }

    /// Returns the URL of the official rate documentation.
    pub fn source_url(&self) -> &str {
        &self.brackets.source_url
    }
}
