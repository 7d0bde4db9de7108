//! Grouped subtotals across stores.

use rust_decimal::Decimal;

use crate::models::{AggregateGroup, AggregateRow, StoreMetrics};

use super::metrics::per_package;
use super::proration::variance;

/// Sums the known values, or `None` if none are known or the sum overflows.
///
/// Unknown values are skipped rather than counted as zero, so a group where
/// no store reported a value stays unknown.
///
/// # Example
///
/// ```
/// use store_recap_engine::calculation::sum_known;
/// use rust_decimal::Decimal;
///
/// assert_eq!(sum_known([Some(Decimal::ONE), None, Some(Decimal::TWO)]), Some(Decimal::new(3, 0)));
/// assert_eq!(sum_known([None, None]), None);
/// ```
pub fn sum_known<I>(values: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Option<Decimal>>,
{
    let mut known = values.into_iter().flatten();
    let first = known.next()?;
    known.try_fold(first, |acc, value| acc.checked_add(value))
}

/// Builds subtotal rows for a batch of stores.
///
/// Returns the stores unchanged, followed by subtotals in the fixed order
/// 6-day, 7-day, all stores. A workweek group with no stores gets no row;
/// the all-stores row is always present.
///
/// Group per-package averages are recomputed from group sums, weighting
/// each store by its package volume.
pub fn aggregate(stores: Vec<StoreMetrics>) -> (Vec<StoreMetrics>, Vec<AggregateRow>) {
    let mut subtotals = Vec::with_capacity(3);

    for group in [AggregateGroup::SixDay, AggregateGroup::SevenDay] {
        let members: Vec<&StoreMetrics> = stores
            .iter()
            .filter(|store| group.includes(store.workweek))
            .collect();
        if !members.is_empty() {
            subtotals.push(subtotal(group, &members));
        }
    }

    let everyone: Vec<&StoreMetrics> = stores.iter().collect();
    subtotals.push(subtotal(AggregateGroup::AllStores, &everyone));

    (stores, subtotals)
}

fn subtotal(group: AggregateGroup, stores: &[&StoreMetrics]) -> AggregateRow {
    let sum = |field: fn(&StoreMetrics) -> Option<Decimal>| sum_known(stores.iter().map(|s| field(s)));

    let ups_packages = stores
        .iter()
        .filter_map(|s| s.ups_packages)
        .try_fold(0u64, |acc, count| acc.checked_add(count));
    let ups_shipping = sum(|s| s.ups_shipping);
    let meter_sales = sum(|s| s.meter_sales);
    let net_sales = sum(|s| s.net_sales);
    let prorated_goal = sum(|s| s.prorated_goal);

    AggregateRow {
        group,
        store_count: stores.len(),

        total_sales: sum(|s| s.total_sales),
        public_service_payments: sum(|s| Some(s.public_service_payments)),
        net_sales,

        ups_shipping,
        ups_packages,
        avg_ups_package: per_package(ups_shipping, ups_packages),
        meter_sales,
        avg_meter_package: per_package(meter_sales, ups_packages),
        mailbox_sales: sum(|s| s.mailbox_sales),

        notary_psp: sum(|s| s.notary_psp),
        printing_copies: sum(|s| s.printing_copies),
        packaging_office_fees: sum(|s| s.packaging_office_fees),
        shred_sales: sum(|s| s.shred_sales),

        monthly_goal: sum(|s| s.monthly_goal),
        prorated_goal,
        variance: variance(net_sales, prorated_goal),
    }
}
