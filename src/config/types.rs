//! Configuration types for store recaps.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata about the goal period a configuration directory describes.
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodMetadata {
    /// Human-readable name of the goal set (e.g., "February 2026 goals").
    pub name: String,
    /// The month the goals were set for, as `YYYY-MM`.
    pub month: String,
}

/// The goal and workweek policy for one center.
///
/// `monthly_goal` is applied unchanged to every month a report's date range
/// touches.
///
/// # Example
///
/// ```
/// use store_recap_engine::config::GoalConfig;
/// use rust_decimal::Decimal;
///
/// let goal = GoalConfig {
///     monthly_goal: Decimal::new(8_000_000, 2),
///     six_day_store: true,
/// };
/// assert!(goal.six_day_store);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalConfig {
    /// The sales goal for one calendar month.
    pub monthly_goal: Decimal,
    /// Whether the store is closed on Sundays.
    pub six_day_store: bool,
}

/// A single center entry from `centers.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CenterConfig {
    /// Display name of the store (e.g., "Yucaipa").
    #[serde(default)]
    pub name: Option<String>,
    /// The monthly goal; a center without one has no goal configuration.
    #[serde(default)]
    pub monthly_goal: Option<Decimal>,
    /// Whether the store is closed on Sundays.
    #[serde(default)]
    pub six_day_store: bool,
}

impl CenterConfig {
    /// Returns the goal configuration, if a monthly goal was entered.
    pub fn goal(&self) -> Option<GoalConfig> {
        self.monthly_goal.map(|monthly_goal| GoalConfig {
            monthly_goal,
            six_day_store: self.six_day_store,
        })
    }
}

/// Centers configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CentersConfig {
    /// Map of center id to center details.
    pub centers: HashMap<String, CenterConfig>,
}

/// The complete recap configuration loaded from YAML files.
///
/// Read-only for the duration of a batch.
#[derive(Debug, Clone)]
pub struct RecapConfig {
    period: PeriodMetadata,
    centers: HashMap<String, CenterConfig>,
}

impl RecapConfig {
    /// Creates a new RecapConfig from its component parts.
    pub fn new(period: PeriodMetadata, centers: HashMap<String, CenterConfig>) -> Self {
        Self { period, centers }
    }

    /// Returns the period metadata.
    pub fn period(&self) -> &PeriodMetadata {
        &self.period
    }

    /// Returns all centers.
    pub fn centers(&self) -> &HashMap<String, CenterConfig> {
        &self.centers
    }
}
