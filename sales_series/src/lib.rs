//! # Sales Series
//!
//! `sales_series` reconciles the sparse, date-keyed output of several
//! forecasting models (plus historical ground truth and backtest replays)
//! into one dense, chronologically sorted wide table suitable for charting
//! and tabulation.
//!
//! ## Features
//!
//! - Outer-join of any number of named series on their date keys
//! - Cross-source precedence for shared weather covariates
//! - Continuity pairs that stitch a backtest series and a live forecast
//!   series into one seamless field
//! - Present-but-null values kept distinct from absent data
//! - Malformed dates skipped per point; duplicate dates fail loudly
//!
//! ## Usage Example
//!
//! ```
//! use sales_series::{merge, DatePoint, NamedSeries, WeatherPrecedence};
//!
//! let historical = NamedSeries::new("historical", vec![
//!     DatePoint::new("2024-06-01", 100.0),
//! ]);
//! let prophet = NamedSeries::new("prophet", vec![
//!     DatePoint::new("2024-06-02", 150.0).with_extra("temp_max", 30.0),
//! ]);
//!
//! let weather = WeatherPrecedence::new(["temp_max"], ["historical", "prophet"]);
//! let out = merge(&[historical, prophet], &weather, &[])?;
//!
//! assert_eq!(out.rows.len(), 2);
//! assert_eq!(out.rows[0].number("historical"), Some(100.0));
//! assert_eq!(out.rows[1].number("temp_max"), Some(30.0));
//! # Ok::<(), sales_series::MergeError>(())
//! ```

pub mod data;
pub mod error;
pub mod merge;

// Re-export commonly used types
pub use crate::data::{parse_date, DatePoint, FieldValue, MergeRow, NamedSeries};
pub use crate::error::{ConfigError, DataError, MergeError, Result};
pub use crate::merge::{merge, ContinuityPair, MergeOutcome, WeatherPrecedence};
