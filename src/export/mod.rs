//! Read-only views of a finished batch.
//!
//! These render the recap table for people: a CSV sheet with the recap's
//! column headings, and the short text summary sent to managers.

mod summary;
mod table;

pub use summary::{UNKNOWN_AMOUNT, format_money, quick_summary};
pub use table::{RecapLine, recap_lines, to_cents, write_csv};
