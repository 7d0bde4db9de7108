//! Goal configuration for the Store Recap Engine.
//!
//! This module loads per-center store names, monthly goals and workweek
//! policy from YAML files. Goals are supplied by the surrounding
//! application and never parsed from report text.
//!
//! # Example
//!
//! ```no_run
//! use store_recap_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/feb-2026").unwrap();
//! println!("Loaded goals: {}", config.period().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CenterConfig, CentersConfig, GoalConfig, PeriodMetadata, RecapConfig};
