//! Parsed report models.
//!
//! This module contains the [`ParsedReport`] produced from one pasted
//! "Worker Sales by Product Category" report, together with its
//! [`CategoryRow`] lines and [`ReportPeriod`].

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One numeric line of the report: a product category or the totals line.
///
/// Values are taken verbatim from the text. The averages are trusted inputs
/// and are never recomputed from income and counts.
///
/// # Example
///
/// ```
/// use store_recap_engine::models::CategoryRow;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let row = CategoryRow {
///     customer_count: 12,
///     item_count: 15,
///     income: Decimal::from_str("243.10").unwrap(),
///     customer_avg: Decimal::from_str("20.26").unwrap(),
///     item_avg: Decimal::from_str("16.21").unwrap(),
/// };
/// assert_eq!(row.customer_count, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRow {
    /// Number of customers who bought in this category.
    pub customer_count: u64,
    /// Number of items sold in this category.
    pub item_count: u64,
    /// Income for the category.
    pub income: Decimal,
    /// Average income per customer, as printed.
    pub customer_avg: Decimal,
    /// Average income per item, as printed.
    pub item_avg: Decimal,
}

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    /// First day of the range (inclusive).
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
}

impl DateSpan {
    /// Returns every day in the range, in order.
    ///
    /// A reversed range (end before start) yields no days.
    ///
    /// # Example
    ///
    /// ```
    /// use store_recap_engine::models::DateSpan;
    /// use chrono::NaiveDate;
    ///
    /// let span = DateSpan {
    ///     start: NaiveDate::from_ymd_opt(2026, 2, 27).unwrap(),
    ///     end: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
    /// };
    /// assert_eq!(span.days().count(), 4);
    /// ```
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }

    /// Returns true when the end date falls before the start date.
    pub fn is_reversed(&self) -> bool {
        self.end < self.start
    }
}

/// The reporting period printed on a report.
///
/// `display` is always present once a "Date Range" block was found. `span`
/// is present only when both date tokens are valid calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// Text shown in the recap's "Date Range" column.
    pub display: String,
    /// The resolved dates, if both tokens parsed.
    pub span: Option<DateSpan>,
}

/// The structured content of one report.
///
/// Every field is independently optional; a report that matched nothing
/// is still a valid `ParsedReport`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReport {
    /// The numeric center id, if a "Center:" block was found.
    pub center_id: Option<String>,
    /// The reporting period, if a "Date Range:" block was found.
    pub period: Option<ReportPeriod>,
    /// Category rows keyed by their trimmed, case-sensitive label.
    pub categories: BTreeMap<String, CategoryRow>,
    /// The report's "Totals" line, if present.
    pub totals: Option<CategoryRow>,
}

impl ParsedReport {
    /// Returns the category row with the exact given label.
    pub fn category(&self, label: &str) -> Option<&CategoryRow> {
        self.categories.get(label)
    }

    /// Returns a category's income, or `None` if the category is absent.
    pub fn income(&self, label: &str) -> Option<Decimal> {
        self.category(label).map(|row| row.income)
    }

    /// Returns a category's customer count, or `None` if the category is absent.
    pub fn customer_count(&self, label: &str) -> Option<u64> {
        self.category(label).map(|row| row.customer_count)
    }

    /// Sums the incomes of the given categories, counting absent ones as zero.
    ///
    /// `None` if the sum overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use store_recap_engine::models::ParsedReport;
    /// use rust_decimal::Decimal;
    ///
    /// let report = ParsedReport::default();
    /// assert_eq!(report.sum_income(&["Printing", "Copies"]), Some(Decimal::ZERO));
    /// ```
    pub fn sum_income(&self, labels: &[&str]) -> Option<Decimal> {
        labels
            .iter()
            .filter_map(|label| self.income(label))
            .try_fold(Decimal::ZERO, |acc, income| acc.checked_add(income))
    }

    /// Returns the income on the totals line, if there is one.
    pub fn total_income(&self) -> Option<Decimal> {
        self.totals.as_ref().map(|row| row.income)
    }

    /// Returns the resolved date range, if both dates parsed.
    pub fn date_span(&self) -> Option<DateSpan> {
        self.period.as_ref().and_then(|p| p.span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn row(customers: u64, income: &str) -> CategoryRow {
        CategoryRow {
            customer_count: customers,
            item_count: customers,
            income: dec(income),
            customer_avg: dec("0.00"),
            item_avg: dec("0.00"),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sum_income_skips_absent_categories() {
        let mut report = ParsedReport::default();
        report.categories.insert("Printing".to_string(), row(3, "10.50"));
        report.categories.insert("Color Copies".to_string(), row(1, "2.25"));

        assert_eq!(
            report.sum_income(&["Printing", "Copies", "Color Copies"]),
            Some(dec("12.75"))
        );
    }

    #[test]
    fn test_sum_income_overflow_is_absent() {
        let mut report = ParsedReport::default();
        report.categories.insert("Printing".to_string(), row(1, "79228162514264337593543950335"));
        report.categories.insert("Copies".to_string(), row(1, "79228162514264337593543950335"));

        assert_eq!(report.sum_income(&["Printing", "Copies"]), None);
        assert_eq!(report.sum_income(&["Printing"]), Some(Decimal::MAX));
    }

    #[test]
    fn test_income_and_count_absent_for_missing_category() {
        let report = ParsedReport::default();
        assert!(report.income("Meter Mail").is_none());
        assert!(report.customer_count("Shipping Charges (UPS)").is_none());
        assert!(report.total_income().is_none());
        assert!(report.date_span().is_none());
    }

    #[test]
    fn test_category_lookup_is_case_sensitive() {
        let mut report = ParsedReport::default();
        report.categories.insert("Notary".to_string(), row(2, "30.00"));

        assert_eq!(report.income("Notary"), Some(dec("30.00")));
        assert!(report.income("notary").is_none());
    }

    #[test]
    fn test_date_span_days_inclusive() {
        let span = DateSpan {
            start: date(2026, 2, 9),
            end: date(2026, 2, 14),
        };
        let days: Vec<_> = span.days().collect();
        assert_eq!(days.len(), 6);
        assert_eq!(days[0], date(2026, 2, 9));
        assert_eq!(days[5], date(2026, 2, 14));
    }

    #[test]
    fn test_reversed_span_has_no_days() {
        let span = DateSpan {
            start: date(2026, 2, 14),
            end: date(2026, 2, 9),
        };
        assert!(span.is_reversed());
        assert_eq!(span.days().count(), 0);
    }

    #[test]
    fn test_serialize_parsed_report() {
        let mut report = ParsedReport {
            center_id: Some("1504".to_string()),
            ..Default::default()
        };
        report.totals = Some(row(40, "18057.89"));

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"center_id\":\"1504\""));
        assert!(json.contains("\"income\":\"18057.89\""));
    }
}
