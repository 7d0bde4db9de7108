//! Store Recap Engine
//!
//! This crate turns pasted "Worker Sales by Product Category" point-of-sale
//! reports into per-store recap metrics: net sales, category buckets,
//! per-package averages, and monthly goals prorated day by day over each
//! report's date range. Stores are then subtotalled by workweek class.

#![warn(missing_docs)]

pub mod batch;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod parsing;
