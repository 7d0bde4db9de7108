//! Calculation logic for the Store Recap Engine.
//!
//! This module contains the category bucket table, per-store metric
//! calculation, exact-calendar goal proration for six- and seven-day
//! stores, and the grouped subtotals across a batch.

pub mod buckets;
mod aggregation;
mod metrics;
mod proration;

pub use aggregation::{aggregate, sum_known};
pub use metrics::{ReportContext, compute_metrics, per_package};
pub use proration::{
    daily_goal, days_in_month, goal_days_in_month, prorate, prorate_span, sundays_in_month,
    variance,
};
