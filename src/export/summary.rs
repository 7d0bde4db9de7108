//! Plain-text manager summary.

use num_format::{Locale, ToFormattedString};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::BatchResult;

use super::table::to_cents;

/// Placeholder for an unknown amount.
pub const UNKNOWN_AMOUNT: &str = "—";

/// Formats an amount as dollars with thousands separators.
///
/// # Example
///
/// ```
/// use store_recap_engine::export::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money(Some(Decimal::new(1805789, 2))), "$18,057.89");
/// assert_eq!(format_money(Some(Decimal::new(-5, 0))), "$-5.00");
/// assert_eq!(format_money(None), "—");
/// ```
pub fn format_money(amount: Option<Decimal>) -> String {
    let Some(amount) = amount else {
        return UNKNOWN_AMOUNT.to_string();
    };

    let cents = to_cents(amount);
    let sign = if cents < Decimal::ZERO { "-" } else { "" };
    let magnitude = cents.abs();
    let whole = magnitude.trunc();
    let fraction = ((magnitude - whole) * Decimal::from(100))
        .to_u32()
        .unwrap_or_default();
    let whole = whole.to_u128().unwrap_or_default();

    format!(
        "${}{}.{:02}",
        sign,
        whole.to_formatted_string(&Locale::en),
        fraction
    )
}

/// Builds the copy/paste summary for a batch.
///
/// One line per store, a blank line, then one line per subtotal.
pub fn quick_summary(result: &BatchResult) -> String {
    let mut lines: Vec<String> = result
        .stores
        .iter()
        .map(|store| {
            format!(
                "{} {} ({}): Net {} | UPS {} (Avg {}) | Meter {} (Avg {}) | Goal {} | Var {}",
                store.label(),
                store.store_name,
                store.workweek,
                format_money(store.net_sales),
                format_money(store.ups_shipping),
                format_money(store.avg_ups_package),
                format_money(store.meter_sales),
                format_money(store.avg_meter_package),
                format_money(store.prorated_goal),
                format_money(store.variance),
            )
        })
        .collect();

    lines.push(String::new());
    lines.extend(result.subtotals.iter().map(|row| {
        format!(
            "{}: Net {} | Goal {} | Var {}",
            row.group.label(),
            format_money(row.net_sales),
            format_money(row.prorated_goal),
            format_money(row.variance),
        )
    }));

    lines.join("\n")
}
