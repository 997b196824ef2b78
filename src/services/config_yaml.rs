use std::fs;
use std::io;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::improvement::ImprovementFactors;
use crate::services::roi_error::RoiError;
use crate::services::validation::ratio;

#[derive(Error, Debug)]
pub enum ConfigYamlError {
    #[error("failed to read config file {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(#[from] RoiError),
}

/// Deployment policy for the engine and the report renderer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoiConfig {
    pub improvement: ImprovementFactors,
    pub truncate_derived_counts: bool,
    pub currency_symbol: String,
}

impl Default for RoiConfig {
    fn default() -> Self {
        Self {
            improvement: ImprovementFactors::default(),
            truncate_derived_counts: true,
            currency_symbol: "$".to_string(),
        }
    }
}

impl RoiConfig {
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigYamlError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigYamlError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&contents).map_err(|err| match err {
            ConfigYamlError::Parse { source, .. } => ConfigYamlError::Parse {
                path: path.to_string(),
                source,
            },
            other => other,
        })
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigYamlError> {
        // An empty document means "all defaults".
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: RoiConfig =
            serde_yaml::from_str(input).map_err(|source| ConfigYamlError::Parse {
                path: String::new(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), RoiError> {
        let factors = &self.improvement;
        ratio("improvement.onboarding_months", factors.onboarding_months)?;
        ratio("improvement.maintenance_capacity", factors.maintenance_capacity)?;
        ratio("improvement.build_hours", factors.build_hours)?;
        ratio("improvement.supporting_headcount", factors.supporting_headcount)?;
        Ok(())
    }
}

/// Loads the config file when one is given, otherwise the built-in policy.
pub fn load_config_if_provided(path: Option<&str>) -> Result<RoiConfig, ConfigYamlError> {
    match path {
        Some(path) => RoiConfig::from_yaml_file(path),
        None => Ok(RoiConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = RoiConfig::from_yaml_str("").unwrap();
        assert_eq!(config, RoiConfig::default());
    }

    #[test]
    fn partial_improvement_section_keeps_other_defaults() {
        let config = RoiConfig::from_yaml_str(
            "improvement:\n  build_hours: 0.25\ncurrency_symbol: \"£\"\n",
        )
        .unwrap();

        assert_eq!(config.improvement.build_hours, 0.25);
        assert_eq!(config.improvement.supporting_headcount, 0.30);
        assert_eq!(config.currency_symbol, "£");
        assert!(config.truncate_derived_counts);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = RoiConfig::from_yaml_str("discount_rate: 0.1\n").unwrap_err();
        assert!(matches!(err, ConfigYamlError::Parse { .. }));
    }

    #[test]
    fn rejects_negative_factor() {
        let err = RoiConfig::from_yaml_str("improvement:\n  onboarding_months: -0.5\n").unwrap_err();
        assert!(matches!(err, ConfigYamlError::Invalid(RoiError::InvalidInput { .. })));
    }

    #[test]
    fn rejects_factor_above_one() {
        let err = RoiConfig::from_yaml_str("improvement:\n  maintenance_capacity: 3.0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigYamlError::Invalid(RoiError::InvalidInput { ref field, .. })
                if field == "improvement.maintenance_capacity"
        ));
    }

    #[test]
    fn accepts_factor_of_exactly_one() {
        let config = RoiConfig::from_yaml_str("improvement:\n  build_hours: 1.0\n").unwrap();
        assert_eq!(config.improvement.build_hours, 1.0);
    }

    #[test]
    fn from_yaml_file_reports_path_of_missing_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let missing = temp.child("missing.yaml");
        let path = missing.path().to_str().unwrap();

        let err = RoiConfig::from_yaml_file(path).unwrap_err();
        assert!(matches!(err, ConfigYamlError::Read { path: ref p, .. } if p == path));
    }

    #[test]
    fn from_yaml_file_reads_truncation_policy() {
        let file = assert_fs::NamedTempFile::new("config.yaml").unwrap();
        file.write_str("truncate_derived_counts: false\n").unwrap();

        let config = load_config_if_provided(file.path().to_str()).unwrap();
        assert!(!config.truncate_derived_counts);
    }
}
