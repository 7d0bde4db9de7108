//! Flat recap table rows and CSV export.

use std::io::Write;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{AggregateRow, BatchResult, StoreMetrics};

/// One line of the recap sheet, for either a store or a subtotal.
///
/// Field names serialize to the sheet's column headings. Amounts are
/// rounded to cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecapLine {
    /// "Center" column.
    #[serde(rename = "Center")]
    pub center: String,
    /// "Store" column.
    #[serde(rename = "Store")]
    pub store: String,
    /// "Date Range" column.
    #[serde(rename = "Date Range")]
    pub date_range: String,
    /// "Workweek" column.
    #[serde(rename = "Workweek")]
    pub workweek: String,
    /// "Total Sales" column.
    #[serde(rename = "Total Sales")]
    pub total_sales: Option<Decimal>,
    /// "Public Service Payments" column.
    #[serde(rename = "Public Service Payments")]
    pub public_service_payments: Option<Decimal>,
    /// "Net Sales (Sales - PSP)" column.
    #[serde(rename = "Net Sales (Sales - PSP)")]
    pub net_sales: Option<Decimal>,
    /// "Average Meter Per Package" column.
    #[serde(rename = "Average Meter Per Package")]
    pub avg_meter_package: Option<Decimal>,
    /// "Total UPS Shipping" column.
    #[serde(rename = "Total UPS Shipping")]
    pub ups_shipping: Option<Decimal>,
    /// "Average UPS Package" column.
    #[serde(rename = "Average UPS Package")]
    pub avg_ups_package: Option<Decimal>,
    /// "Total Meter Sales" column.
    #[serde(rename = "Total Meter Sales")]
    pub meter_sales: Option<Decimal>,
    /// "Packaging/Office Supplies/Service Fees" column.
    #[serde(rename = "Packaging/Office Supplies/Service Fees")]
    pub packaging_office_fees: Option<Decimal>,
    /// "Notary + Public Service Payments" column.
    #[serde(rename = "Notary + Public Service Payments")]
    pub notary_psp: Option<Decimal>,
    /// "Mailbox Sales" column.
    #[serde(rename = "Mailbox Sales")]
    pub mailbox_sales: Option<Decimal>,
    /// "Printing & Copies" column.
    #[serde(rename = "Printing & Copies")]
    pub printing_copies: Option<Decimal>,
    /// "Shred Sales" column.
    #[serde(rename = "Shred Sales")]
    pub shred_sales: Option<Decimal>,
    /// "Monthly Goal" column.
    #[serde(rename = "Monthly Goal")]
    pub monthly_goal: Option<Decimal>,
    /// "Prorated Goal (Exact Calendar)" column.
    #[serde(rename = "Prorated Goal (Exact Calendar)")]
    pub prorated_goal: Option<Decimal>,
    /// "Variance vs Prorated Goal" column.
    #[serde(rename = "Variance vs Prorated Goal")]
    pub variance: Option<Decimal>,
}

/// Rounds an amount half away from zero and fixes it at two decimal places.
///
/// # Example
///
/// ```
/// use store_recap_engine::export::to_cents;
/// use rust_decimal::Decimal;
///
/// assert_eq!(to_cents(Decimal::new(12345, 3)).to_string(), "12.35");
/// assert_eq!(to_cents(Decimal::new(20000, 0)).to_string(), "20000.00");
/// ```
pub fn to_cents(amount: Decimal) -> Decimal {
    let mut cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    cents.rescale(2);
    cents
}

fn cents(amount: Option<Decimal>) -> Option<Decimal> {
    amount.map(to_cents)
}

impl From<&StoreMetrics> for RecapLine {
    fn from(store: &StoreMetrics) -> Self {
        Self {
            center: store.label(),
            store: store.store_name.clone(),
            date_range: store.date_range.clone(),
            workweek: store.workweek.to_string(),
            total_sales: cents(store.total_sales),
            public_service_payments: cents(Some(store.public_service_payments)),
            net_sales: cents(store.net_sales),
            avg_meter_package: cents(store.avg_meter_package),
            ups_shipping: cents(store.ups_shipping),
            avg_ups_package: cents(store.avg_ups_package),
            meter_sales: cents(store.meter_sales),
            packaging_office_fees: cents(store.packaging_office_fees),
            notary_psp: cents(store.notary_psp),
            mailbox_sales: cents(store.mailbox_sales),
            printing_copies: cents(store.printing_copies),
            shred_sales: cents(store.shred_sales),
            monthly_goal: cents(store.monthly_goal),
            prorated_goal: cents(store.prorated_goal),
            variance: cents(store.variance),
        }
    }
}

impl From<&AggregateRow> for RecapLine {
    fn from(row: &AggregateRow) -> Self {
        Self {
            center: row.group.label().to_string(),
            store: String::new(),
            date_range: String::new(),
            workweek: String::new(),
            total_sales: cents(row.total_sales),
            public_service_payments: cents(row.public_service_payments),
            net_sales: cents(row.net_sales),
            avg_meter_package: cents(row.avg_meter_package),
            ups_shipping: cents(row.ups_shipping),
            avg_ups_package: cents(row.avg_ups_package),
            meter_sales: cents(row.meter_sales),
            packaging_office_fees: cents(row.packaging_office_fees),
            notary_psp: cents(row.notary_psp),
            mailbox_sales: cents(row.mailbox_sales),
            printing_copies: cents(row.printing_copies),
            shred_sales: cents(row.shred_sales),
            monthly_goal: cents(row.monthly_goal),
            prorated_goal: cents(row.prorated_goal),
            variance: cents(row.variance),
        }
    }
}

/// Flattens a batch into sheet order: stores first, then subtotals.
pub fn recap_lines(result: &BatchResult) -> Vec<RecapLine> {
    result
        .stores
        .iter()
        .map(RecapLine::from)
        .chain(result.subtotals.iter().map(RecapLine::from))
        .collect()
}

/// Writes the recap sheet as CSV with a heading row.
///
/// Unknown amounts are written as empty cells.
pub fn write_csv<W: Write>(result: &BatchResult, writer: W) -> EngineResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for line in recap_lines(result) {
        csv_writer.serialize(line)?;
    }
    csv_writer.flush().map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })
}
