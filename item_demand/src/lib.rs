//! # Item Demand
//!
//! `item_demand` computes cumulative demand rollups per catalog item over a
//! fixed set of look-ahead horizons. Given each item's daily forecast records,
//! it answers "how many will we sell in the next 1, 3, 7, ... days" with one
//! row per item, suitable for direct tabulation.
//!
//! ## Usage Example
//!
//! ```
//! use item_demand::{aggregate, ForecastRecord};
//! use chrono::NaiveDate;
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
//! let records = vec![
//!     ForecastRecord::new("i-1", "Margherita", day(1), 10.0),
//!     ForecastRecord::new("i-1", "Margherita", day(2), 20.0),
//!     ForecastRecord::new("i-1", "Margherita", day(3), 5.0),
//! ];
//!
//! let rows = aggregate(&records, &[1, 3, 7])?;
//! assert_eq!(rows[0].cumulative, vec![10.0, 35.0, 35.0]);
//! # Ok::<(), item_demand::ConfigError>(())
//! ```

use thiserror::Error;

mod horizon;

pub use crate::horizon::{aggregate, ForecastRecord, HorizonRow};

/// Invalid caller-supplied horizon configuration. Always fatal: a duplicate
/// or non-positive horizon is a caller bug, not a data-quality problem.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Horizon lengths must be positive day counts
    #[error("horizon values must be positive, got {value}")]
    NonPositiveHorizon { value: usize },

    /// Horizon lengths must be distinct
    #[error("duplicate horizon value {value}")]
    DuplicateHorizon { value: usize },
}

/// Result type with our configuration error
pub type Result<T> = std::result::Result<T, ConfigError>;
