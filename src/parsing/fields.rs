//! Field-level conversions for report tokens.
//!
//! All functions return `None` instead of failing so one bad token only
//! blanks the field it belongs to.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Two-digit years below this pivot belong to the 2000s, the rest to the 1900s.
const TWO_DIGIT_YEAR_PIVOT: i32 = 69;

/// Parses a currency token such as `$1,204.50`.
///
/// Thousands separators and a leading currency symbol are stripped before
/// conversion.
///
/// # Example
///
/// ```
/// use store_recap_engine::parsing::parse_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(parse_currency("$18,057.89"), Some(Decimal::from_str("18057.89").unwrap()));
/// assert_eq!(parse_currency("n/a"), None);
/// ```
pub fn parse_currency(token: &str) -> Option<Decimal> {
    let cleaned: String = token
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '$')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Parses a non-negative count, allowing thousands separators.
pub fn parse_count(token: &str) -> Option<u64> {
    let cleaned = token.trim().replace(',', "");
    cleaned.parse::<u64>().ok()
}

/// Parses a `month/day/year` token with a two- or four-digit year.
///
/// # Example
///
/// ```
/// use store_recap_engine::parsing::parse_report_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_report_date("2/9/2026"), NaiveDate::from_ymd_opt(2026, 2, 9));
/// assert_eq!(parse_report_date("2/9/26"), NaiveDate::from_ymd_opt(2026, 2, 9));
/// assert_eq!(parse_report_date("2/30/2026"), None);
/// ```
pub fn parse_report_date(token: &str) -> Option<NaiveDate> {
    let mut parts = token.trim().split('/');
    let (month, day, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    let year = match year.len() {
        4 => year.parse::<i32>().ok()?,
        2 => {
            let yy = year.parse::<i32>().ok()?;
            if yy < TWO_DIGIT_YEAR_PIVOT {
                2000 + yy
            } else {
                1900 + yy
            }
        }
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Formats a date the way the recap shows it, e.g. `2/9/2026`.
pub fn format_report_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
