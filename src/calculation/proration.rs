//! Exact-calendar goal proration.
//!
//! A monthly goal is spread over the days of each month the reporting
//! period touches. Seven-day stores earn `goal / days_in_month` per day.
//! Six-day stores earn nothing on Sundays and `goal / (days_in_month -
//! sundays_in_month)` on every other day. The same monthly goal is used for
//! every month in the range.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::models::DateSpan;

/// Returns the number of days in the month containing `date`.
///
/// # Example
///
/// ```
/// use store_recap_engine::calculation::days_in_month;
/// use chrono::NaiveDate;
///
/// assert_eq!(days_in_month(NaiveDate::from_ymd_opt(2026, 2, 9).unwrap()), 28);
/// assert_eq!(days_in_month(NaiveDate::from_ymd_opt(2028, 2, 1).unwrap()), 29);
/// ```
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        // Only reachable for the last month chrono can represent.
        None => 31,
    }
}

/// Returns the number of Sundays in the month containing `date`.
pub fn sundays_in_month(date: NaiveDate) -> u32 {
    first_of_month(date)
        .iter_days()
        .take(days_in_month(date) as usize)
        .filter(|d| d.weekday() == Weekday::Sun)
        .count() as u32
}

/// Returns the number of days a month's goal is spread over.
///
/// All days for a seven-day store; all but Sundays for a six-day store.
pub fn goal_days_in_month(date: NaiveDate, six_day_store: bool) -> u32 {
    let days = days_in_month(date);
    if six_day_store {
        days.saturating_sub(sundays_in_month(date))
    } else {
        days
    }
}

/// Returns one day's share of the monthly goal.
///
/// Zero on Sundays for six-day stores, and zero if the month has no goal days.
///
/// # Example
///
/// ```
/// use store_recap_engine::calculation::daily_goal;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // 2026-02-08 is a Sunday; February 2026 has 24 non-Sunday days.
/// let sunday = NaiveDate::from_ymd_opt(2026, 2, 8).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2026, 2, 9).unwrap();
/// let goal = Decimal::new(24_000, 0);
///
/// assert_eq!(daily_goal(goal, sunday, true), Decimal::ZERO);
/// assert_eq!(daily_goal(goal, monday, true), Decimal::new(1_000, 0));
/// ```
pub fn daily_goal(monthly_goal: Decimal, day: NaiveDate, six_day_store: bool) -> Decimal {
    if six_day_store && day.weekday() == Weekday::Sun {
        return Decimal::ZERO;
    }
    let goal_days = goal_days_in_month(day, six_day_store);
    if goal_days == 0 {
        return Decimal::ZERO;
    }
    monthly_goal / Decimal::from(goal_days)
}

/// Prorates a monthly goal over an inclusive date range.
///
/// Returns `None` if the goal or either date is unknown.
///
/// # Example
///
/// ```
/// use store_recap_engine::calculation::prorate;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDate::from_ymd_opt(2026, 2, 1);
/// let end = NaiveDate::from_ymd_opt(2026, 2, 28);
/// let goal = Decimal::new(8_000_000, 2);
///
/// assert_eq!(prorate(Some(goal), start, end, false), Some(goal));
/// assert_eq!(prorate(None, start, end, false), None);
/// ```
pub fn prorate(
    monthly_goal: Option<Decimal>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    six_day_store: bool,
) -> Option<Decimal> {
    let span = DateSpan {
        start: start_date?,
        end: end_date?,
    };
    Some(prorate_span(monthly_goal?, span, six_day_store))
}

/// Prorates a monthly goal over a resolved date range.
///
/// The result equals the sum of [`daily_goal`] over every day in the range.
/// Counted days are grouped per month and divided once, so a whole month
/// reproduces the monthly goal exactly. A reversed range prorates to zero.
pub fn prorate_span(monthly_goal: Decimal, span: DateSpan, six_day_store: bool) -> Decimal {
    let mut counted: BTreeMap<(i32, u32), (NaiveDate, u32)> = BTreeMap::new();
    for day in span.days() {
        if six_day_store && day.weekday() == Weekday::Sun {
            continue;
        }
        counted
            .entry((day.year(), day.month()))
            .or_insert((day, 0))
            .1 += 1;
    }

    counted
        .into_values()
        .map(|(day, days)| {
            let goal_days = goal_days_in_month(day, six_day_store);
            if goal_days == 0 {
                Decimal::ZERO
            } else {
                monthly_goal * Decimal::from(days) / Decimal::from(goal_days)
            }
        })
        .sum()
}

/// Net sales minus prorated goal, or `None` if either is unknown.
///
/// A store exactly on goal has a variance of zero; behind goal is negative.
/// `None` on overflow.
pub fn variance(net_sales: Option<Decimal>, prorated_goal: Option<Decimal>) -> Option<Decimal> {
    net_sales?.checked_sub(prorated_goal?)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}
