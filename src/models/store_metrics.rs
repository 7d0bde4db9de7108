//! Per-store metric rows.
//!
//! This module defines [`StoreMetrics`], the row produced for each report
//! in a batch, and the [`Workweek`] class stores are grouped by.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a store trades seven days a week or is closed on Sundays.
///
/// # Example
///
/// ```
/// use store_recap_engine::models::Workweek;
///
/// assert_eq!(Workweek::from_six_day(true), Workweek::SixDay);
/// assert_eq!(Workweek::SevenDay.to_string(), "7-day");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Workweek {
    /// Closed on Sundays.
    SixDay,
    /// Open every day. Stores without configuration fall here.
    #[default]
    SevenDay,
}

impl Workweek {
    /// Maps the configuration flag onto a workweek class.
    pub fn from_six_day(six_day_store: bool) -> Self {
        if six_day_store {
            Workweek::SixDay
        } else {
            Workweek::SevenDay
        }
    }

    /// Returns true for stores closed on Sundays.
    pub fn is_six_day(self) -> bool {
        self == Workweek::SixDay
    }
}

impl std::fmt::Display for Workweek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Workweek::SixDay => write!(f, "6-day"),
            Workweek::SevenDay => write!(f, "7-day"),
        }
    }
}

/// Derived metrics for one report.
///
/// `None` always means "unknown": the report lacked the line the value is
/// derived from, a divisor was zero, or the arithmetic overflowed. Bucket
/// fields are zero when none of their categories appear, and `None` only on
/// overflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreMetrics {
    /// 1-based position of the report in the submitted batch.
    pub report_index: usize,
    /// Center id read from the report.
    pub center: Option<String>,
    /// Configured display name, empty when the center is unknown.
    pub store_name: String,
    /// Display text for the reporting period, empty when none was found.
    pub date_range: String,
    /// Resolved first day of the reporting period.
    pub start_date: Option<NaiveDate>,
    /// Resolved last day of the reporting period.
    pub end_date: Option<NaiveDate>,
    /// Workweek class from goal configuration (7-day by default).
    pub workweek: Workweek,

    /// Income on the totals line.
    pub total_sales: Option<Decimal>,
    /// Public Service Payments income (zero when absent).
    pub public_service_payments: Decimal,
    /// Total sales minus Public Service Payments.
    pub net_sales: Option<Decimal>,

    /// "Shipping Charges (UPS)" income.
    pub ups_shipping: Option<Decimal>,
    /// "Shipping Charges (UPS)" customer count; a zero count is stored as `None`.
    pub ups_packages: Option<u64>,
    /// UPS shipping per UPS package.
    pub avg_ups_package: Option<Decimal>,
    /// "Meter Mail" income.
    pub meter_sales: Option<Decimal>,
    /// Meter sales per UPS package.
    pub avg_meter_package: Option<Decimal>,
    /// "Mailbox Service" income.
    pub mailbox_sales: Option<Decimal>,

    /// Notary plus Public Service Payments.
    pub notary_psp: Option<Decimal>,
    /// Printing, Copies and Color Copies.
    pub printing_copies: Option<Decimal>,
    /// Office supplies, packaging materials and fees, retail shipping supplies.
    pub packaging_office_fees: Option<Decimal>,
    /// Shred, Shred Sales and Shredding.
    pub shred_sales: Option<Decimal>,

    /// Configured monthly goal.
    pub monthly_goal: Option<Decimal>,
    /// Monthly goal prorated over the reporting period.
    pub prorated_goal: Option<Decimal>,
    /// Net sales minus prorated goal.
    pub variance: Option<Decimal>,
}

impl StoreMetrics {
    /// The label shown in the recap's "Center" column.
    ///
    /// Falls back to the report's batch position when no center was found.
    pub fn label(&self) -> String {
        match &self.center {
            Some(center) => center.clone(),
            None => format!("(Report #{})", self.report_index),
        }
    }
}
