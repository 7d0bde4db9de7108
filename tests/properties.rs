//! Property tests for parsing, proration and aggregation.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use proptest::prelude::*;
use rust_decimal::Decimal;

use store_recap_engine::calculation::{
    ReportContext, aggregate, compute_metrics, days_in_month, goal_days_in_month, prorate,
    variance,
};
use store_recap_engine::config::GoalConfig;
use store_recap_engine::models::AggregateGroup;
use store_recap_engine::parsing::parse_report;

/// Monthly goals between $0.00 and $1,000,000.00.
fn goal_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Any date in 2000-2099.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..36_500).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Days::new(offset)
    })
}

fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap();
    let last = first + Days::new(u64::from(days_in_month(date)) - 1);
    (first, last)
}

fn money(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

proptest! {
    #[test]
    fn parsing_is_deterministic(text in "(?s).{0,400}") {
        prop_assert_eq!(parse_report(&text), parse_report(&text));
    }

    #[test]
    fn structured_parsing_is_deterministic(
        center in 1000u32..9999,
        rows in prop::collection::vec(("[A-Z][a-z]{2,12}", 0u64..500, 0i64..1_000_000), 0..12),
    ) {
        let mut text = format!("Center:\n{}\n\nDate Range:\n2/9/2026\nto\n2/14/2026\n\n", center);
        for (label, count, cents) in &rows {
            text.push_str(&format!(
                "+ {} {} {} {} $1.00 $1.00\n",
                label, count, count, money(*cents)
            ));
        }
        text.push_str("Totals 1 1 $1.00 $1.00 $1.00\n");

        let first = parse_report(&text);
        prop_assert_eq!(&first, &parse_report(&text));
        prop_assert_eq!(first.center_id, Some(center.to_string()));
    }

    #[test]
    fn last_duplicate_category_wins(first in 0i64..1_000_000, last in 0i64..1_000_000) {
        let text = format!(
            "+ Meter Mail 1 1 {} $1.00 $1.00\n+ Meter Mail 2 2 {} $1.00 $1.00\n",
            money(first),
            money(last)
        );
        let report = parse_report(&text);
        prop_assert_eq!(report.income("Meter Mail"), Some(Decimal::new(last, 2)));
        prop_assert_eq!(report.customer_count("Meter Mail"), Some(2));
    }

    #[test]
    fn single_day_is_goal_over_days_in_month(goal in goal_strategy(), day in date_strategy()) {
        let prorated = prorate(Some(goal), Some(day), Some(day), false).unwrap();
        prop_assert_eq!(prorated, goal / Decimal::from(days_in_month(day)));
    }

    #[test]
    fn full_month_reproduces_goal(goal in goal_strategy(), day in date_strategy(), six_day in any::<bool>()) {
        let (first, last) = month_bounds(day);
        prop_assert_eq!(prorate(Some(goal), Some(first), Some(last), six_day), Some(goal));
    }

    #[test]
    fn sundays_add_nothing_for_six_day_stores(goal in goal_strategy(), day in date_strategy()) {
        let days_to_sunday = (7 - day.weekday().num_days_from_sunday()) % 7;
        let sunday = day + Days::new(u64::from(days_to_sunday));
        prop_assert_eq!(sunday.weekday(), Weekday::Sun);

        prop_assert_eq!(prorate(Some(goal), Some(sunday), Some(sunday), true), Some(Decimal::ZERO));

        // Saturday through Sunday costs the same as Saturday alone.
        let saturday = sunday - Days::new(1);
        prop_assert_eq!(
            prorate(Some(goal), Some(saturday), Some(sunday), true),
            prorate(Some(goal), Some(saturday), Some(saturday), true)
        );
    }

    #[test]
    fn six_day_single_day_uses_non_sunday_divisor(goal in goal_strategy(), day in date_strategy()) {
        prop_assume!(day.weekday() != Weekday::Sun);
        let prorated = prorate(Some(goal), Some(day), Some(day), true).unwrap();
        prop_assert_eq!(prorated, goal / Decimal::from(goal_days_in_month(day, true)));
    }

    #[test]
    fn variance_is_zero_on_goal(amount in goal_strategy()) {
        prop_assert_eq!(variance(Some(amount), Some(amount)), Some(Decimal::ZERO));
        prop_assert_eq!(variance(None, Some(amount)), None);
    }

    #[test]
    fn all_stores_subtotal_sums_known_net_sales(
        stores in prop::collection::vec((0i64..10_000_000, any::<bool>(), any::<bool>()), 0..8),
    ) {
        let metrics: Vec<_> = stores
            .iter()
            .enumerate()
            .map(|(i, (cents, six_day, has_totals))| {
                let mut text = format!("Center:\n{}\n", 1000 + i);
                if *has_totals {
                    text.push_str(&format!("Totals 1 1 {} $1.00 $1.00\n", money(*cents)));
                }
                let goal = GoalConfig { monthly_goal: Decimal::ONE, six_day_store: *six_day };
                compute_metrics(&parse_report(&text), Some(goal), ReportContext::new(i + 1, ""))
            })
            .collect();

        let expected: Vec<Decimal> = stores
            .iter()
            .filter(|(_, _, has_totals)| *has_totals)
            .map(|(cents, _, _)| Decimal::new(*cents, 2))
            .collect();

        let (_, subtotals) = aggregate(metrics);
        let all = subtotals.last().unwrap();
        prop_assert_eq!(all.group, AggregateGroup::AllStores);
        prop_assert_eq!(all.store_count, stores.len());
        if expected.is_empty() {
            prop_assert_eq!(all.net_sales, None);
        } else {
            prop_assert_eq!(all.net_sales, Some(expected.iter().sum::<Decimal>()));
        }
    }
}
