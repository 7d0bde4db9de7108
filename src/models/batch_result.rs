//! Batch result models for the Store Recap Engine.
//!
//! This module contains the [`BatchResult`] type returned for one submitted
//! batch of reports, and the [`AuditWarning`]s collected along the way.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AggregateRow, StoreMetrics};

/// Warning code: no "Center:" block was found.
pub const MISSING_CENTER: &str = "MISSING_CENTER";
/// Warning code: no "Date Range:" block was found.
pub const MISSING_DATE_RANGE: &str = "MISSING_DATE_RANGE";
/// Warning code: date tokens were present but not valid calendar dates.
pub const UNPARSABLE_DATE: &str = "UNPARSABLE_DATE";
/// Warning code: the end date falls before the start date.
pub const REVERSED_DATE_RANGE: &str = "REVERSED_DATE_RANGE";
/// Warning code: no "Totals" line was found.
pub const MISSING_TOTALS: &str = "MISSING_TOTALS";
/// Warning code: the center has no monthly goal configured.
pub const NO_GOAL_CONFIG: &str = "NO_GOAL_CONFIG";
/// Warning code: per-package averages could not be divided out.
pub const NO_UPS_PACKAGES: &str = "NO_UPS_PACKAGES";

/// A warning raised while processing one report.
///
/// Warnings never stop a batch; they explain why a row has unknown values.
///
/// # Example
///
/// ```
/// use store_recap_engine::models::{AuditWarning, MISSING_TOTALS};
///
/// let warning = AuditWarning::new(3, MISSING_TOTALS, "no Totals line", "medium");
/// assert_eq!(warning.report_index, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// 1-based position of the report the warning is about.
    pub report_index: usize,
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a warning for the report at `report_index`.
    pub fn new(
        report_index: usize,
        code: &str,
        message: impl Into<String>,
        severity: &str,
    ) -> Self {
        Self {
            report_index,
            code: code.to_string(),
            message: message.into(),
            severity: severity.to_string(),
        }
    }
}

/// The complete result of processing one batch of reports.
///
/// `stores` are in submission order; `subtotals` are in the fixed order
/// 6-day, 7-day, all stores, with empty workweek groups omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Unique identifier for this batch.
    pub batch_id: Uuid,
    /// When the batch was processed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that processed the batch.
    pub engine_version: String,
    /// One row per non-blank report.
    pub stores: Vec<StoreMetrics>,
    /// Group subtotal rows.
    pub subtotals: Vec<AggregateRow>,
    /// Warnings raised while processing, in report order.
    pub warnings: Vec<AuditWarning>,
}

impl BatchResult {
    /// Returns true if no report in the batch produced a row.
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// Returns the warnings raised for one report.
    pub fn warnings_for(&self, report_index: usize) -> impl Iterator<Item = &AuditWarning> {
        self.warnings
            .iter()
            .filter(move |w| w.report_index == report_index)
    }
}
