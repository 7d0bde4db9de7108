//! Report text parsing.
//!
//! Turns one pasted "Worker Sales by Product Category" report into a
//! [`ParsedReport`](crate::models::ParsedReport). The expected layout is:
//!
//! ```text
//! Center:
//! <digits>
//!
//! Date Range:
//! <m>/<d>/<yyyy|yy>
//! to
//! <m>/<d>/<yyyy|yy>
//!
//! <+|-> <category name> <customers> <items> $<income> $<customer avg> $<item avg>
//! ...
//! Totals <customers> <items> $<income> $<customer avg> $<item avg>
//! ```

mod fields;
mod report_parser;

pub use fields::{format_report_date, parse_count, parse_currency, parse_report_date};
pub use report_parser::parse_report;
