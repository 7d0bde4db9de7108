//! Subtotal rows over groups of stores.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Workweek;

/// The subset of stores a subtotal row covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateGroup {
    /// Stores closed on Sundays.
    SixDay,
    /// Stores open every day.
    SevenDay,
    /// Every store in the batch.
    AllStores,
}

impl AggregateGroup {
    /// Returns true if a store of the given workweek class belongs to this group.
    pub fn includes(self, workweek: Workweek) -> bool {
        match self {
            AggregateGroup::SixDay => workweek == Workweek::SixDay,
            AggregateGroup::SevenDay => workweek == Workweek::SevenDay,
            AggregateGroup::AllStores => true,
        }
    }

    /// The label shown in the recap's "Center" column.
    pub fn label(self) -> &'static str {
        match self {
            AggregateGroup::SixDay => "TOTAL (6-day stores)",
            AggregateGroup::SevenDay => "TOTAL (7-day stores)",
            AggregateGroup::AllStores => "TOTAL (All stores)",
        }
    }
}

/// Sums and weighted averages over a group of [`StoreMetrics`](super::StoreMetrics).
///
/// Currency sums ignore stores where the value is unknown and are `None`
/// only when no store in the group knows the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateRow {
    /// Which stores this row covers.
    pub group: AggregateGroup,
    /// Number of stores in the group.
    pub store_count: usize,

    /// Sum of total sales.
    pub total_sales: Option<Decimal>,
    /// Sum of Public Service Payments.
    pub public_service_payments: Option<Decimal>,
    /// Sum of net sales.
    pub net_sales: Option<Decimal>,

    /// Sum of UPS shipping.
    pub ups_shipping: Option<Decimal>,
    /// Sum of UPS package counts, missing counts as zero; `None` on overflow.
    pub ups_packages: Option<u64>,
    /// Group UPS shipping over group UPS packages.
    pub avg_ups_package: Option<Decimal>,
    /// Sum of meter sales.
    pub meter_sales: Option<Decimal>,
    /// Group meter sales over group UPS packages.
    pub avg_meter_package: Option<Decimal>,
    /// Sum of mailbox sales.
    pub mailbox_sales: Option<Decimal>,

    /// Sum of Notary plus Public Service Payments.
    pub notary_psp: Option<Decimal>,
    /// Sum of printing and copies.
    pub printing_copies: Option<Decimal>,
    /// Sum of packaging, office supplies and service fees.
    pub packaging_office_fees: Option<Decimal>,
    /// Sum of shred sales.
    pub shred_sales: Option<Decimal>,

    /// Sum of monthly goals.
    pub monthly_goal: Option<Decimal>,
    /// Sum of prorated goals.
    pub prorated_goal: Option<Decimal>,
    /// Group net sales minus group prorated goal.
    pub variance: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_membership() {
        assert!(AggregateGroup::SixDay.includes(Workweek::SixDay));
        assert!(!AggregateGroup::SixDay.includes(Workweek::SevenDay));
        assert!(AggregateGroup::SevenDay.includes(Workweek::SevenDay));
        assert!(AggregateGroup::AllStores.includes(Workweek::SixDay));
        assert!(AggregateGroup::AllStores.includes(Workweek::SevenDay));
    }

    #[test]
    fn test_group_labels() {
        assert_eq!(AggregateGroup::SixDay.label(), "TOTAL (6-day stores)");
        assert_eq!(AggregateGroup::SevenDay.label(), "TOTAL (7-day stores)");
        assert_eq!(AggregateGroup::AllStores.label(), "TOTAL (All stores)");
    }
}
