//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading center goal
//! configurations from YAML files.

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CenterConfig, CentersConfig, GoalConfig, PeriodMetadata, RecapConfig};

/// Loads and provides access to center goal configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query store names and goals by center id.
///
/// # Directory Structure
///
/// ```text
/// config/feb-2026/
/// ├── period.yaml   # Goal period metadata
/// └── centers.yaml  # Store names, monthly goals and workweek per center
/// ```
///
/// # Example
///
/// ```no_run
/// use store_recap_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/feb-2026").unwrap();
///
/// let goal = loader.goal_for("1504").unwrap();
/// println!("Monthly goal: ${}", goal.monthly_goal);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RecapConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/feb-2026")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any configured monthly goal is negative
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let period = Self::load_yaml::<PeriodMetadata>(&path.join("period.yaml"))?;
        let centers = Self::load_yaml::<CentersConfig>(&path.join("centers.yaml"))?;

        Self::from_config(RecapConfig::new(period, centers.centers))
    }

    /// Builds a loader from YAML text already in memory.
    ///
    /// Useful when the surrounding application holds the goal table itself
    /// rather than a directory on disk.
    ///
    /// # Example
    ///
    /// ```
    /// use store_recap_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml_str(
    ///     "name: Test goals\nmonth: 2026-02\n",
    ///     "centers:\n  \"1504\":\n    name: Yucaipa\n    monthly_goal: \"80000.00\"\n",
    /// )?;
    /// assert_eq!(loader.store_name("1504"), Some("Yucaipa"));
    /// # Ok::<(), store_recap_engine::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(period_yaml: &str, centers_yaml: &str) -> EngineResult<Self> {
        let period: PeriodMetadata =
            serde_yaml::from_str(period_yaml).map_err(|e| EngineError::ConfigParseError {
                path: "period.yaml".to_string(),
                message: e.to_string(),
            })?;
        let centers: CentersConfig =
            serde_yaml::from_str(centers_yaml).map_err(|e| EngineError::ConfigParseError {
                path: "centers.yaml".to_string(),
                message: e.to_string(),
            })?;

        Self::from_config(RecapConfig::new(period, centers.centers))
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: RecapConfig) -> EngineResult<Self> {
        Self::validate(config.centers())?;
        Ok(Self { config })
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

    fn validate(centers: &HashMap<String, CenterConfig>) -> EngineResult<()> {
        for (center, entry) in centers {
            if let Some(goal) = entry.monthly_goal {
                if goal < Decimal::ZERO {
                    return Err(EngineError::InvalidGoal {
                        center: center.clone(),
                        message: format!("monthly goal must not be negative, got {}", goal),
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the underlying recap configuration.
    pub fn config(&self) -> &RecapConfig {
        &self.config
    }

    /// Returns the period metadata.
    pub fn period(&self) -> &PeriodMetadata {
        self.config.period()
    }

    /// Gets a center entry by its id.
    ///
    /// # Returns
    ///
    /// Returns the center if found, or `CenterNotFound` error.
    pub fn get_center(&self, center: &str) -> EngineResult<&CenterConfig> {
        self.config
            .centers()
            .get(center)
            .ok_or_else(|| EngineError::CenterNotFound {
                center: center.to_string(),
            })
    }

    /// Gets the goal configuration for a center.
    ///
    /// `None` when the center is unknown or has no monthly goal entered.
    pub fn goal_for(&self, center: &str) -> Option<GoalConfig> {
        self.get_center(center).ok().and_then(CenterConfig::goal)
    }

    /// Gets the display name for a center, if one is configured.
    pub fn store_name(&self, center: &str) -> Option<&str> {
        self.get_center(center).ok().and_then(|c| c.name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/feb-2026"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    const PERIOD: &str = "name: Test goals\nmonth: 2026-02\n";

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.period().month, "2026-02");
        assert_eq!(loader.config().centers().len(), 8);
    }

    #[test]
    fn test_shipped_goals_and_names() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.store_name("1504"), Some("Yucaipa"));
        assert_eq!(loader.store_name("7261"), Some("Ayala"));

        let goal = loader.goal_for("5027").unwrap();
        assert_eq!(goal.monthly_goal, dec("90200.00"));
        assert!(!goal.six_day_store);
    }

    #[test]
    fn test_get_center_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.get_center("9999") {
            Err(EngineError::CenterNotFound { center }) => assert_eq!(center, "9999"),
            other => panic!("Expected CenterNotFound error, got {:?}", other),
        }
        assert!(loader.goal_for("9999").is_none());
        assert!(loader.store_name("9999").is_none());
    }

    #[test]
    fn test_center_without_goal_has_no_goal_config() {
        let loader = ConfigLoader::from_yaml_str(
            PERIOD,
            "centers:\n  \"1504\":\n    name: Yucaipa\n    six_day_store: true\n",
        )
        .unwrap();

        assert!(loader.get_center("1504").is_ok());
        assert!(loader.goal_for("1504").is_none());
    }

    #[test]
    fn test_six_day_flag_carried_into_goal() {
        let loader = ConfigLoader::from_yaml_str(
            PERIOD,
            "centers:\n  \"5255\":\n    monthly_goal: \"63200.00\"\n    six_day_store: true\n",
        )
        .unwrap();

        let goal = loader.goal_for("5255").unwrap();
        assert!(goal.six_day_store);
        assert_eq!(goal.monthly_goal, dec("63200.00"));
        assert!(loader.store_name("5255").is_none());
    }

    #[test]
    fn test_negative_goal_rejected() {
        let result = ConfigLoader::from_yaml_str(
            PERIOD,
            "centers:\n  \"1504\":\n    monthly_goal: \"-1.00\"\n",
        );

        match result {
            Err(EngineError::InvalidGoal { center, .. }) => assert_eq!(center, "1504"),
            other => panic!("Expected InvalidGoal error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str(PERIOD, "centers: [not, a, map");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("period.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }
}
