//! Default dashboard configuration and the per-view entry points
//!
//! Every chart view feeds its series through [`chart_table`] and every
//! cumulative-demand table goes through [`demand_table`], so the precedence,
//! continuity, and horizon conventions live in one place.

use std::collections::HashSet;

use item_demand::{aggregate, ForecastRecord, HorizonRow};
use sales_series::{merge, ContinuityPair, MergeOutcome, NamedSeries, WeatherPrecedence};

use crate::adapt::{HISTORY_SOURCE, REPLAY_SOURCE};

/// Horizon lengths (days) shown in the cumulative-demand table.
pub const DEFAULT_HORIZONS: [usize; 7] = [1, 2, 3, 5, 7, 10, 14];

/// Covariate fields that more than one source can supply.
pub const WEATHER_FIELDS: [&str; 2] = ["temp_max", "rain_category"];

/// Sources consulted for weather, observed truth first so the order of
/// operations never changes the result.
pub const WEATHER_SOURCES: [&str; 2] = [HISTORY_SOURCE, "prophet"];

/// The full dashboard weather precedence.
pub fn weather_precedence() -> WeatherPrecedence {
    WeatherPrecedence::new(WEATHER_FIELDS, WEATHER_SOURCES)
}

/// The continuity pairs that keep per-item quantile lines seamless across
/// the backtest/forecast boundary.
pub fn continuity_pairs() -> Vec<ContinuityPair> {
    vec![
        ContinuityPair::new(
            format!("{REPLAY_SOURCE}_p50"),
            "forecast_p50",
            "unified_p50",
        ),
        ContinuityPair::new(
            format!("{REPLAY_SOURCE}_p90"),
            "forecast_p90",
            "unified_p90",
        ),
    ]
}

/// Merge chart series under the dashboard's standard configuration.
///
/// The default precedence and continuity lists are filtered down to the
/// sources actually present, so views with toggled-off models (or without a
/// backtest stage yet) never trip the core's strict configuration checks; a
/// pair with only one member present degrades to that member.
///
/// # Errors
///
/// Propagates the core's [`sales_series::MergeError`] (duplicate dates or
/// series names in the input).
pub fn chart_table(series: &[NamedSeries]) -> sales_series::Result<MergeOutcome> {
    let present: HashSet<&str> = series.iter().map(|s| s.name.as_str()).collect();

    let weather = WeatherPrecedence::new(
        WEATHER_FIELDS,
        WEATHER_SOURCES
            .iter()
            .copied()
            .filter(|source| present.contains(source)),
    );

    let pairs: Vec<ContinuityPair> = continuity_pairs()
        .into_iter()
        .filter_map(|pair| {
            let has_primary = present.contains(pair.primary.as_str());
            let has_fallback = present.contains(pair.fallback.as_str());
            match (has_primary, has_fallback) {
                (true, true) => Some(pair),
                (true, false) => Some(ContinuityPair::new(
                    pair.primary.clone(),
                    pair.primary,
                    pair.unified,
                )),
                (false, true) => Some(ContinuityPair::new(
                    pair.fallback.clone(),
                    pair.fallback,
                    pair.unified,
                )),
                (false, false) => None,
            }
        })
        .collect();

    merge(series, &weather, &pairs)
}

/// Roll per-item records up over the standard horizon set.
///
/// # Errors
///
/// Propagates the core's [`item_demand::ConfigError`]; with the default
/// horizons this cannot fire.
pub fn demand_table(records: &[ForecastRecord]) -> item_demand::Result<Vec<HorizonRow>> {
    aggregate(records, &DEFAULT_HORIZONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_series::DatePoint;

    #[test]
    fn toggled_off_models_do_not_trip_config_checks() {
        // Only historical data: no prophet, no per-item stages.
        let historical = NamedSeries::new(
            HISTORY_SOURCE,
            vec![DatePoint::new("2024-06-01", 100.0).with_extra("temp_max", 20.0)],
        );

        let out = chart_table(&[historical]).unwrap();
        assert_eq!(out.rows.len(), 1);
        assert_eq!(out.rows[0].number("temp_max"), Some(20.0));
    }

    #[test]
    fn forecast_only_items_still_get_a_unified_line() {
        let forecast = NamedSeries::new("forecast_p50", vec![DatePoint::new("2024-06-02", 12.0)]);

        let out = chart_table(&[forecast]).unwrap();
        assert_eq!(out.rows[0].number("unified_p50"), Some(12.0));
    }
}
