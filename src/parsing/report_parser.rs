//! Extraction of a [`ParsedReport`] from pasted report text.
//!
//! The report is loosely formatted, so each field is located by its own
//! pattern anywhere in the text and parsed independently of the others.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::models::{CategoryRow, DateSpan, ParsedReport, ReportPeriod};

use super::fields::{format_report_date, parse_count, parse_currency, parse_report_date};

static CENTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Center:\s*\n[ \t]*(\d+)").expect("center pattern is valid")
});

static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Date Range:\s*\n[ \t]*([0-9/]+)\s*\n[ \t]*to\s*\n[ \t]*([0-9/]+)")
        .expect("date range pattern is valid")
});

// Non-greedy label so names with spaces, digits or parentheses still leave
// exactly five numeric fields at the end of the line.
static CATEGORY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^[+\-][ \t]*(.+?)[ \t]+(\d+)[ \t]+(\d+)[ \t]+(\$?[\d,]+\.\d{2})[ \t]+(\$?[\d,]+\.\d{2})[ \t]+(\$?[\d,]+\.\d{2})[ \t\r]*$",
    )
    .expect("category pattern is valid")
});

static TOTALS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?mi)^Totals[ \t]+(\d+)[ \t]+(\d+)[ \t]+(\$?[\d,]+\.\d{2})[ \t]+(\$?[\d,]+\.\d{2})[ \t]+(\$?[\d,]+\.\d{2})[ \t\r]*$",
    )
    .expect("totals pattern is valid")
});

/// Parses one report's text.
///
/// Never fails: anything that cannot be found or converted is left absent.
/// When a category label appears more than once, the last occurrence wins.
///
/// # Example
///
/// ```
/// use store_recap_engine::parsing::parse_report;
///
/// let text = "Center:\n1504\n\nDate Range:\n2/9/2026\nto\n2/14/2026\n\n\
///             + Notary 3 3 $45.00 $15.00 $15.00\n\
///             Totals 3 3 $45.00 $15.00 $15.00\n";
///
/// let report = parse_report(text);
/// assert_eq!(report.center_id.as_deref(), Some("1504"));
/// assert_eq!(report.period.unwrap().display, "2/9/2026 to 2/14/2026");
/// assert!(report.categories.contains_key("Notary"));
/// assert!(report.totals.is_some());
/// ```
pub fn parse_report(text: &str) -> ParsedReport {
    let mut categories = std::collections::BTreeMap::new();
    for caps in CATEGORY_RE.captures_iter(text) {
        if let Some(row) = category_row(&caps, 2) {
            let label = caps[1].trim().to_string();
            categories.insert(label, row);
        }
    }

    ParsedReport {
        center_id: parse_center(text),
        period: parse_period(text),
        categories,
        totals: TOTALS_RE
            .captures(text)
            .and_then(|caps| category_row(&caps, 1)),
    }
}

fn parse_center(text: &str) -> Option<String> {
    CENTER_RE.captures(text).map(|caps| caps[1].to_string())
}

fn parse_period(text: &str) -> Option<ReportPeriod> {
    let caps = DATE_RANGE_RE.captures(text)?;
    let (start_raw, end_raw) = (caps[1].trim(), caps[2].trim());

    match (parse_report_date(start_raw), parse_report_date(end_raw)) {
        (Some(start), Some(end)) => Some(ReportPeriod {
            display: format!(
                "{} to {}",
                format_report_date(start),
                format_report_date(end)
            ),
            span: Some(DateSpan { start, end }),
        }),
        _ => Some(ReportPeriod {
            display: format!("{} to {}", start_raw, end_raw),
            span: None,
        }),
    }
}

/// Builds a row from five consecutive capture groups starting at `first`.
fn category_row(caps: &Captures<'_>, first: usize) -> Option<CategoryRow> {
    Some(CategoryRow {
        customer_count: parse_count(&caps[first])?,
        item_count: parse_count(&caps[first + 1])?,
        income: parse_currency(&caps[first + 2])?,
        customer_avg: parse_currency(&caps[first + 3])?,
        item_avg: parse_currency(&caps[first + 4])?,
    })
}
