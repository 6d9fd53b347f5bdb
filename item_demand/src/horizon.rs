//! Prefix-sum rollups of per-item forecasts over fixed horizon lengths

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Result};

/// One forecast day for one catalog item.
///
/// Dates within one item's records are unique but need not be contiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    /// Catalog item identifier
    pub item_id: String,
    /// Item display name
    pub item_name: String,
    /// Forecast date
    pub date: NaiveDate,
    /// Median (p50) demand estimate
    pub point_estimate: f64,
    /// Upper (p90) demand estimate
    pub upper_estimate: f64,
    /// Probability of at least one sale on this date
    pub sale_probability: f64,
}

impl ForecastRecord {
    /// Point-only record: the upper estimate collapses to the point estimate
    /// and the sale probability is left at zero. Use [`Self::with_upper`] and
    /// [`Self::with_sale_probability`] when the full feed shape is available.
    pub fn new(
        item_id: impl Into<String>,
        item_name: impl Into<String>,
        date: NaiveDate,
        point_estimate: f64,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            item_name: item_name.into(),
            date,
            point_estimate,
            upper_estimate: point_estimate,
            sale_probability: 0.0,
        }
    }

    /// Set the upper (p90) estimate.
    pub fn with_upper(mut self, upper_estimate: f64) -> Self {
        self.upper_estimate = upper_estimate;
        self
    }

    /// Set the sale probability.
    pub fn with_sale_probability(mut self, sale_probability: f64) -> Self {
        self.sale_probability = sale_probability;
        self
    }
}

/// One output row per item: cumulative point-estimate demand for each
/// configured horizon, `cumulative[i]` aligned with the caller's
/// `horizons[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizonRow {
    /// Catalog item identifier
    pub item_id: String,
    /// Item display name
    pub item_name: String,
    /// Cumulative demand per configured horizon
    pub cumulative: Vec<f64>,
}

/// Roll each item's forecast records up into cumulative demand per horizon.
///
/// Records are partitioned by `item_id`, sorted by ascending date, and summed
/// left to right; horizon `h` takes the prefix sum of the first `h` records,
/// or of all records when fewer than `h` exist (forecasts near the data
/// boundary are legitimately shorter). Rows come back sorted by
/// case-insensitive item name for presentation stability.
///
/// # Errors
///
/// Returns [`ConfigError`] when `horizons` contains a duplicate or a zero
/// value.
pub fn aggregate(records: &[ForecastRecord], horizons: &[usize]) -> Result<Vec<HorizonRow>> {
    let mut seen: HashSet<usize> = HashSet::new();
    for &h in horizons {
        if h == 0 {
            return Err(ConfigError::NonPositiveHorizon { value: h });
        }
        if !seen.insert(h) {
            return Err(ConfigError::DuplicateHorizon { value: h });
        }
    }

    let mut by_item: HashMap<&str, Vec<&ForecastRecord>> = HashMap::new();
    for record in records {
        by_item
            .entry(record.item_id.as_str())
            .or_default()
            .push(record);
    }

    let mut rows: Vec<HorizonRow> = Vec::with_capacity(by_item.len());
    for mut group in by_item.into_values() {
        group.sort_by_key(|r| r.date);

        // Left-to-right accumulation in date order keeps results reproducible
        // for a given input.
        let mut prefix: Vec<f64> = Vec::with_capacity(group.len() + 1);
        let mut total = 0.0;
        prefix.push(total);
        for record in &group {
            total += record.point_estimate;
            prefix.push(total);
        }

        let cumulative = horizons
            .iter()
            .map(|&h| prefix[h.min(group.len())])
            .collect();
        let first = group[0];
        rows.push(HorizonRow {
            item_id: first.item_id.clone(),
            item_name: first.item_name.clone(),
            cumulative,
        });
    }

    rows.sort_by(|a, b| {
        a.item_name
            .to_lowercase()
            .cmp(&b.item_name.to_lowercase())
            .then_with(|| a.item_name.cmp(&b.item_name))
            .then_with(|| a.item_id.cmp(&b.item_id))
    });

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn unsorted_records_are_summed_in_date_order() {
        let records = vec![
            ForecastRecord::new("i-1", "Caesar Salad", day(3), 5.0),
            ForecastRecord::new("i-1", "Caesar Salad", day(1), 10.0),
            ForecastRecord::new("i-1", "Caesar Salad", day(2), 20.0),
        ];

        let rows = aggregate(&records, &[2]).unwrap();
        assert_eq!(rows[0].cumulative, vec![30.0]);
    }

    #[test]
    fn no_records_means_no_rows() {
        let rows = aggregate(&[], &[1, 7]).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn empty_horizons_yield_empty_rollups() {
        let records = vec![ForecastRecord::new("i-1", "Caesar Salad", day(1), 10.0)];
        let rows = aggregate(&records, &[]).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].cumulative.is_empty());
    }
}
