//! # Menu Forecast
//!
//! `menu_forecast` sits between the remote analytics/forecast service and the
//! dashboard views. It defines the collaborator's payload record types, pure
//! adapters that turn those payloads into inputs for the reconciliation cores
//! ([`sales_series`] and [`item_demand`]), and the dashboard's standard
//! merge/rollup configuration.
//!
//! ## Usage Example
//!
//! ```
//! use menu_forecast::adapt::{history_series, model_series, Metric};
//! use menu_forecast::dashboard::chart_table;
//! use menu_forecast::feed::{HistoryDay, ModelDay};
//!
//! let history = vec![HistoryDay {
//!     date: "2024-06-01".to_string(),
//!     revenue: 100.0,
//!     orders: 12.0,
//!     temp_max: Some(21.0),
//!     rain_category: None,
//! }];
//! let prophet = vec![ModelDay {
//!     date: "2024-06-02".to_string(),
//!     revenue: 150.0,
//!     orders: 14.0,
//!     temp_max: Some(30.0),
//!     rain_category: Some("none".to_string()),
//!     lower: None,
//!     upper: None,
//! }];
//!
//! let mut series = vec![history_series(&history, Metric::Revenue)];
//! series.extend(model_series("prophet", &prophet, Metric::Revenue));
//!
//! let table = chart_table(&series)?;
//! assert_eq!(table.rows.len(), 2);
//! # Ok::<(), sales_series::MergeError>(())
//! ```

pub mod adapt;
pub mod dashboard;
pub mod error;
pub mod feed;

// Re-export commonly used types
pub use crate::adapt::{Metric, Quantile, HISTORY_SOURCE, REPLAY_SOURCE};
pub use crate::dashboard::{chart_table, demand_table, DEFAULT_HORIZONS};
pub use crate::error::{FeedError, Result};
pub use crate::feed::{HistoryDay, ItemForecastDay, ItemSaleDay, MenuItem, ModelDay, ReplayDay};
