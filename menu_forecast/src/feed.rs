//! Record types for the external forecast/history collaborator payloads
//!
//! These mirror the JSON shapes the analytics service returns. Dates arrive
//! as strings and stay strings here; the reconciliation core owns parsing.

use serde::{Deserialize, Serialize};

/// One day of historical actuals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryDay {
    /// Calendar date
    pub date: String,
    /// Realized revenue
    pub revenue: f64,
    /// Realized order count
    pub orders: f64,
    /// Observed maximum temperature, when available
    #[serde(default)]
    pub temp_max: Option<f64>,
    /// Observed rain category, when available
    #[serde(default)]
    pub rain_category: Option<String>,
}

/// One day of a single model's forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDay {
    /// Calendar date
    pub date: String,
    /// Projected revenue
    pub revenue: f64,
    /// Projected order count
    pub orders: f64,
    /// Forecasted maximum temperature, when the model carries weather
    #[serde(default)]
    pub temp_max: Option<f64>,
    /// Forecasted rain category, when the model carries weather
    #[serde(default)]
    pub rain_category: Option<String>,
    /// Lower uncertainty bound, for models that emit one
    #[serde(default)]
    pub lower: Option<f64>,
    /// Upper uncertainty bound, for models that emit one
    #[serde(default)]
    pub upper: Option<f64>,
}

/// A catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Item identifier
    pub id: String,
    /// Item display name
    pub name: String,
}

/// One day of realized sales for one catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSaleDay {
    /// Calendar date
    pub date: String,
    /// Item identifier
    pub item_id: String,
    /// Units sold
    pub quantity: f64,
}

/// One forecast day for one catalog item. Backtest series reuse this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemForecastDay {
    /// Calendar date
    pub date: String,
    /// Item identifier
    pub item_id: String,
    /// Item display name
    pub item_name: String,
    /// Median demand estimate
    pub p50: f64,
    /// Upper (90th percentile) demand estimate
    pub p90: f64,
    /// Probability of at least one sale
    pub sale_probability: f64,
}

/// One day of a replay/audit series: a forecast computed as-of a past date
/// next to the since-realized actual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayDay {
    /// Calendar date
    pub date: String,
    /// Predicted mean
    pub mean: f64,
    /// Predicted standard deviation, when the model reports one
    #[serde(default)]
    pub std_dev: Option<f64>,
    /// Lower 95% bound
    pub lower_95: f64,
    /// Upper 95% bound
    pub upper_95: f64,
    /// Realized value, or `None` where not yet realized
    #[serde(default)]
    pub actual: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_day_optional_fields_default() {
        let day: HistoryDay =
            serde_json::from_str(r#"{"date": "2024-06-01", "revenue": 100.0, "orders": 12.0}"#)
                .unwrap();
        assert_eq!(day.temp_max, None);
        assert_eq!(day.rain_category, None);
    }

    #[test]
    fn replay_day_roundtrips_null_actual() {
        let raw = r#"{
            "date": "2024-06-01",
            "mean": 95.5,
            "std_dev": 4.2,
            "lower_95": 87.0,
            "upper_95": 104.0,
            "actual": null
        }"#;
        let day: ReplayDay = serde_json::from_str(raw).unwrap();
        assert_eq!(day.actual, None);
        assert_eq!(day.std_dev, Some(4.2));
    }
}
