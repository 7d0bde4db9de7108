//! Per-store metric calculation.
//!
//! This module turns a [`ParsedReport`] into a [`StoreMetrics`] row:
//! net sales, the category buckets, per-package averages, and the
//! prorated goal and variance.

use rust_decimal::Decimal;

use crate::config::GoalConfig;
use crate::models::{ParsedReport, StoreMetrics, Workweek};

use super::buckets::{
    MAILBOX_SERVICE, METER_MAIL, NOTARY_PSP, PACKAGING_OFFICE_FEES, PRINTING_COPIES,
    PUBLIC_SERVICE_PAYMENTS, SHRED_SALES, UPS_SHIPPING,
};
use super::proration::{prorate, variance};

/// Where a report sits in its batch and which store it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContext {
    /// 1-based position of the report in the submitted batch.
    pub report_index: usize,
    /// Configured display name for the report's center, empty if unknown.
    pub store_name: String,
}

impl ReportContext {
    /// Creates a context for the report at `report_index`.
    pub fn new(report_index: usize, store_name: impl Into<String>) -> Self {
        Self {
            report_index,
            store_name: store_name.into(),
        }
    }
}

impl Default for ReportContext {
    fn default() -> Self {
        Self::new(1, "")
    }
}

/// Divides an amount by a package count.
///
/// `None` when the amount is unknown or the count is unknown or zero.
///
/// # Example
///
/// ```
/// use store_recap_engine::calculation::per_package;
/// use rust_decimal::Decimal;
///
/// assert_eq!(per_package(Some(Decimal::new(300, 0)), Some(12)), Some(Decimal::new(25, 0)));
/// assert_eq!(per_package(Some(Decimal::new(300, 0)), Some(0)), None);
/// assert_eq!(per_package(None, Some(12)), None);
/// ```
pub fn per_package(amount: Option<Decimal>, packages: Option<u64>) -> Option<Decimal> {
    match (amount, packages) {
        (Some(amount), Some(packages)) if packages > 0 => Some(amount / Decimal::from(packages)),
        _ => None,
    }
}

/// Computes one store's metrics from its parsed report.
///
/// The workweek class comes from `goal`; a store without goal
/// configuration is treated as a seven-day store with no goal.
///
/// Meter sales are averaged over the UPS package count, which is how the
/// recap defines "Average Meter Per Package".
///
/// # Example
///
/// ```
/// use store_recap_engine::calculation::{compute_metrics, ReportContext};
/// use store_recap_engine::parsing::parse_report;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let report = parse_report(
///     "+ Public Service Payments 4 4 $500.00 $125.00 $125.00\n\
///      Totals 120 410 $18057.89 $150.48 $44.04\n",
/// );
/// let metrics = compute_metrics(&report, None, ReportContext::default());
///
/// assert_eq!(metrics.net_sales, Some(Decimal::from_str("17557.89").unwrap()));
/// assert_eq!(metrics.prorated_goal, None);
/// ```
pub fn compute_metrics(
    parsed: &ParsedReport,
    goal: Option<GoalConfig>,
    context: ReportContext,
) -> StoreMetrics {
    let total_sales = parsed.total_income();
    let public_service_payments = parsed
        .income(PUBLIC_SERVICE_PAYMENTS)
        .unwrap_or(Decimal::ZERO);
    let net_sales = total_sales.and_then(|total| total.checked_sub(public_service_payments));

    let ups_shipping = parsed.income(UPS_SHIPPING);
    let ups_packages = parsed.customer_count(UPS_SHIPPING).filter(|count| *count > 0);
    let meter_sales = parsed.income(METER_MAIL);

    let workweek = Workweek::from_six_day(goal.is_some_and(|g| g.six_day_store));
    let monthly_goal = goal.map(|g| g.monthly_goal);
    let span = parsed.date_span();
    let prorated_goal = prorate(
        monthly_goal,
        span.map(|s| s.start),
        span.map(|s| s.end),
        workweek.is_six_day(),
    );

    StoreMetrics {
        report_index: context.report_index,
        center: parsed.center_id.clone(),
        store_name: context.store_name,
        date_range: parsed
            .period
            .as_ref()
            .map(|p| p.display.clone())
            .unwrap_or_default(),
        start_date: span.map(|s| s.start),
        end_date: span.map(|s| s.end),
        workweek,

        total_sales,
        public_service_payments,
        net_sales,

        ups_shipping,
        ups_packages,
        avg_ups_package: per_package(ups_shipping, ups_packages),
        meter_sales,
        avg_meter_package: per_package(meter_sales, ups_packages),
        mailbox_sales: parsed.income(MAILBOX_SERVICE),

        notary_psp: parsed.sum_income(NOTARY_PSP),
        printing_copies: parsed.sum_income(PRINTING_COPIES),
        packaging_office_fees: parsed.sum_income(PACKAGING_OFFICE_FEES),
        shred_sales: parsed.sum_income(SHRED_SALES),

        monthly_goal,
        prorated_goal,
        variance: variance(net_sales, prorated_goal),
    }
}
