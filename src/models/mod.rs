//! Core data models for the Store Recap Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod aggregate;
mod batch_result;
mod report;
mod store_metrics;

pub use aggregate::{AggregateGroup, AggregateRow};
pub use batch_result::{
    AuditWarning, BatchResult, MISSING_CENTER, MISSING_DATE_RANGE, MISSING_TOTALS,
    NO_GOAL_CONFIG, NO_UPS_PACKAGES, REVERSED_DATE_RANGE, UNPARSABLE_DATE,
};
pub use report::{CategoryRow, DateSpan, ParsedReport, ReportPeriod};
pub use store_metrics::{StoreMetrics, Workweek};
