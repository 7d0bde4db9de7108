//! Category labels and the bucket table.
//!
//! Buckets are fixed lists of exact, case-sensitive report labels. A label
//! missing from a report contributes zero to a bucket.

/// Pass-through payments excluded from net sales.
pub const PUBLIC_SERVICE_PAYMENTS: &str = "Public Service Payments";

/// UPS shipping; its customer count is the UPS package count.
pub const UPS_SHIPPING: &str = "Shipping Charges (UPS)";

/// Postage meter sales.
pub const METER_MAIL: &str = "Meter Mail";

/// Mailbox rentals.
pub const MAILBOX_SERVICE: &str = "Mailbox Service";

/// Notary services.
pub const NOTARY: &str = "Notary";

/// "Notary + Public Service Payments".
pub const NOTARY_PSP: &[&str] = &[NOTARY, PUBLIC_SERVICE_PAYMENTS];

/// "Printing & Copies".
pub const PRINTING_COPIES: &[&str] = &["Printing", "Copies", "Color Copies"];

/// "Packaging/Office Supplies/Service Fees".
pub const PACKAGING_OFFICE_FEES: &[&str] = &[
    "Office Supplies",
    "Packaging Materials",
    "Packaging Service Fee",
    "Retail Shipping Supplies",
];

/// "Shred Sales". Stores label shredding differently, so all three count.
pub const SHRED_SALES: &[&str] = &["Shred Sales", "Shred", "Shredding"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notary_bucket_includes_psp() {
        assert!(NOTARY_PSP.contains(&PUBLIC_SERVICE_PAYMENTS));
        assert!(NOTARY_PSP.contains(&"Notary"));
    }

    #[test]
    fn test_buckets_do_not_overlap() {
        let buckets = [PRINTING_COPIES, PACKAGING_OFFICE_FEES, SHRED_SALES, NOTARY_PSP];
        let mut seen = std::collections::HashSet::new();
        for label in buckets.iter().flat_map(|b| b.iter()) {
            assert!(seen.insert(*label), "label {} in two buckets", label);
        }
    }
}
