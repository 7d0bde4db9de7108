//! Batch processing of pasted reports.
//!
//! Each report is parsed and measured independently, in parallel. Once
//! every report is done the rows are reduced into subtotals in a single
//! step.

use std::time::Instant;

use chrono::Utc;
use rayon::prelude::*;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{ReportContext, aggregate, compute_metrics};
use crate::config::ConfigLoader;
use crate::models::{
    AuditWarning, BatchResult, MISSING_CENTER, MISSING_DATE_RANGE, MISSING_TOTALS,
    NO_GOAL_CONFIG, NO_UPS_PACKAGES, ParsedReport, REVERSED_DATE_RANGE, StoreMetrics,
    UNPARSABLE_DATE,
};
use crate::parsing::parse_report;

/// The version stamped on every [`BatchResult`].
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Processes a batch of report texts into a recap table.
///
/// Blank texts are skipped but still count towards report positions, so
/// row labels match the slot the report was pasted into. Store rows keep
/// submission order.
///
/// # Example
///
/// ```no_run
/// use store_recap_engine::batch::process_batch;
/// use store_recap_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/feb-2026").unwrap();
/// let reports = vec![std::fs::read_to_string("yucaipa.txt").unwrap(), String::new()];
///
/// let result = process_batch(&reports, &config);
/// for row in &result.subtotals {
///     println!("{}: {:?}", row.group.label(), row.net_sales);
/// }
/// ```
pub fn process_batch<S>(reports: &[S], config: &ConfigLoader) -> BatchResult
where
    S: AsRef<str> + Sync,
{
    let batch_id = Uuid::new_v4();
    let start_time = Instant::now();
    info!(batch_id = %batch_id, reports = reports.len(), "Processing report batch");

    let outcomes: Vec<Option<(StoreMetrics, Vec<AuditWarning>)>> = reports
        .par_iter()
        .enumerate()
        .map(|(i, text)| process_report(i + 1, text.as_ref(), config))
        .collect();

    let mut stores = Vec::with_capacity(outcomes.len());
    let mut warnings = Vec::new();
    for (metrics, report_warnings) in outcomes.into_iter().flatten() {
        stores.push(metrics);
        warnings.extend(report_warnings);
    }

    for warning in &warnings {
        warn!(
            batch_id = %batch_id,
            report_index = warning.report_index,
            code = %warning.code,
            "{}",
            warning.message
        );
    }

    let (stores, subtotals) = aggregate(stores);

    info!(
        batch_id = %batch_id,
        stores = stores.len(),
        warnings = warnings.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Report batch completed"
    );

    BatchResult {
        batch_id,
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        stores,
        subtotals,
        warnings,
    }
}

/// Parses and measures a single report.
///
/// Returns `None` for blank text. Goal configuration and the store name are
/// looked up by the center id found in the report.
pub fn process_report(
    report_index: usize,
    text: &str,
    config: &ConfigLoader,
) -> Option<(StoreMetrics, Vec<AuditWarning>)> {
    if text.trim().is_empty() {
        return None;
    }

    let parsed = parse_report(text);
    let center = parsed.center_id.as_deref();
    let goal = center.and_then(|c| config.goal_for(c));
    let store_name = center.and_then(|c| config.store_name(c)).unwrap_or_default();

    let metrics = compute_metrics(&parsed, goal, ReportContext::new(report_index, store_name));
    debug!(
        report_index,
        center = center.unwrap_or("-"),
        categories = parsed.categories.len(),
        workweek = %metrics.workweek,
        "Parsed report"
    );

    let warnings = audit_report(&parsed, &metrics, config);
    Some((metrics, warnings))
}

fn audit_report(
    parsed: &ParsedReport,
    metrics: &StoreMetrics,
    config: &ConfigLoader,
) -> Vec<AuditWarning> {
    let index = metrics.report_index;
    let mut warnings = Vec::new();

    match &parsed.center_id {
        None => warnings.push(AuditWarning::new(
            index,
            MISSING_CENTER,
            format!("No center id found; row labelled {}", metrics.label()),
            "low",
        )),
        Some(center) if metrics.monthly_goal.is_none() => {
            let message = match config.get_center(center) {
                Ok(_) => format!(
                    "No monthly goal configured for center {}; treated as a 7-day store",
                    center
                ),
                Err(err) => format!("{}; treated as a 7-day store with no goal", err),
            };
            warnings.push(AuditWarning::new(index, NO_GOAL_CONFIG, message, "low"));
        }
        Some(_) => {}
    }

    match &parsed.period {
        None => warnings.push(AuditWarning::new(
            index,
            MISSING_DATE_RANGE,
            "No date range found; goal cannot be prorated",
            "medium",
        )),
        Some(period) => match period.span {
            None => warnings.push(AuditWarning::new(
                index,
                UNPARSABLE_DATE,
                format!(
                    "Date range '{}' is not a valid calendar range; goal cannot be prorated",
                    period.display
                ),
                "medium",
            )),
            Some(span) if span.is_reversed() => warnings.push(AuditWarning::new(
                index,
                REVERSED_DATE_RANGE,
                format!("Date range '{}' ends before it starts", period.display),
                "medium",
            )),
            Some(_) => {}
        },
    }

    if parsed.totals.is_none() {
        warnings.push(AuditWarning::new(
            index,
            MISSING_TOTALS,
            "No Totals line found; total and net sales are unknown",
            "high",
        ));
    }

    if metrics.ups_packages.is_none()
        && (metrics.ups_shipping.is_some() || metrics.meter_sales.is_some())
    {
        warnings.push(AuditWarning::new(
            index,
            NO_UPS_PACKAGES,
            "No UPS packages counted; per-package averages are unknown",
            "low",
        ));
    }

    warnings
}
