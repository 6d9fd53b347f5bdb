//! Adapters from collaborator payloads to reconciliation-core inputs

use item_demand::ForecastRecord;
use sales_series::{parse_date, DatePoint, NamedSeries};

use crate::error::{FeedError, Result};
use crate::feed::{HistoryDay, ItemForecastDay, ItemSaleDay, ModelDay, ReplayDay};

/// Source name the historical actuals series is merged under.
pub const HISTORY_SOURCE: &str = "historical";

/// Source name prefix used for replay/audit series.
pub const REPLAY_SOURCE: &str = "backtest";

/// Which primary metric a chart is plotting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Revenue,
    Orders,
}

impl Metric {
    fn from_history(self, day: &HistoryDay) -> f64 {
        match self {
            Metric::Revenue => day.revenue,
            Metric::Orders => day.orders,
        }
    }

    fn from_model(self, day: &ModelDay) -> f64 {
        match self {
            Metric::Revenue => day.revenue,
            Metric::Orders => day.orders,
        }
    }
}

/// Which per-item quantile a series tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantile {
    P50,
    P90,
}

impl Quantile {
    fn suffix(self) -> &'static str {
        match self {
            Quantile::P50 => "p50",
            Quantile::P90 => "p90",
        }
    }

    fn pick(self, day: &ItemForecastDay) -> f64 {
        match self {
            Quantile::P50 => day.p50,
            Quantile::P90 => day.p90,
        }
    }
}

fn weather_extras(point: DatePoint, temp_max: Option<f64>, rain: Option<&str>) -> DatePoint {
    let point = match temp_max {
        Some(t) => point.with_extra("temp_max", t),
        None => point,
    };
    match rain {
        Some(r) => point.with_extra("rain_category", r),
        None => point,
    }
}

/// Historical actuals as the `"historical"` series, weather carried as extras.
pub fn history_series(days: &[HistoryDay], metric: Metric) -> NamedSeries {
    let points = days
        .iter()
        .map(|day| {
            weather_extras(
                DatePoint::new(day.date.clone(), metric.from_history(day)),
                day.temp_max,
                day.rain_category.as_deref(),
            )
        })
        .collect();
    NamedSeries::new(HISTORY_SOURCE, points)
}

/// One model's forecast as chartable series: the main series under `name`,
/// plus `"{name}_lower"`/`"{name}_upper"` bound series when any day carries
/// bounds (the Gaussian-process model does, the baselines don't).
pub fn model_series(name: &str, days: &[ModelDay], metric: Metric) -> Vec<NamedSeries> {
    let main = days
        .iter()
        .map(|day| {
            weather_extras(
                DatePoint::new(day.date.clone(), metric.from_model(day)),
                day.temp_max,
                day.rain_category.as_deref(),
            )
        })
        .collect();

    let mut series = vec![NamedSeries::new(name, main)];

    let lower: Vec<DatePoint> = days
        .iter()
        .filter_map(|day| day.lower.map(|v| DatePoint::new(day.date.clone(), v)))
        .collect();
    if !lower.is_empty() {
        series.push(NamedSeries::new(format!("{name}_lower"), lower));
    }

    let upper: Vec<DatePoint> = days
        .iter()
        .filter_map(|day| day.upper.map(|v| DatePoint::new(day.date.clone(), v)))
        .collect();
    if !upper.is_empty() {
        series.push(NamedSeries::new(format!("{name}_upper"), upper));
    }

    series
}

/// Realized per-item sales as the `"historical"` series for one item's chart.
pub fn item_sales_series(days: &[ItemSaleDay]) -> NamedSeries {
    let points = days
        .iter()
        .map(|day| DatePoint::new(day.date.clone(), day.quantity))
        .collect();
    NamedSeries::new(HISTORY_SOURCE, points)
}

/// One quantile of a per-item forecast stage as a series named
/// `"{source}_p50"` / `"{source}_p90"` (e.g. `"forecast_p50"`,
/// `"backtest_p90"`).
pub fn item_quantile_series(
    source: &str,
    days: &[ItemForecastDay],
    quantile: Quantile,
) -> NamedSeries {
    let points = days
        .iter()
        .map(|day| DatePoint::new(day.date.clone(), quantile.pick(day)))
        .collect();
    NamedSeries::new(format!("{source}_{}", quantile.suffix()), points)
}

/// A replay/audit feed as chartable series: predicted mean (with the reported
/// std-dev carried as an extra), the 95% band, and the realized actuals.
/// Days whose actual is not yet realized become present-but-null points so
/// the table still shows the model explicitly had nothing to compare against.
pub fn replay_series(days: &[ReplayDay]) -> Vec<NamedSeries> {
    let mean = days
        .iter()
        .map(|day| {
            let point = DatePoint::new(day.date.clone(), day.mean);
            match day.std_dev {
                Some(sd) => point.with_extra("std_dev", sd),
                None => point,
            }
        })
        .collect();
    let lower = days
        .iter()
        .map(|day| DatePoint::new(day.date.clone(), day.lower_95))
        .collect();
    let upper = days
        .iter()
        .map(|day| DatePoint::new(day.date.clone(), day.upper_95))
        .collect();
    let actual = days
        .iter()
        .map(|day| match day.actual {
            Some(v) => DatePoint::new(day.date.clone(), v),
            None => DatePoint::reported_null(day.date.clone()),
        })
        .collect();

    vec![
        NamedSeries::new(REPLAY_SOURCE, mean),
        NamedSeries::new(format!("{REPLAY_SOURCE}_lower"), lower),
        NamedSeries::new(format!("{REPLAY_SOURCE}_upper"), upper),
        NamedSeries::new("actual", actual),
    ]
}

/// Per-item forecast days as aggregator records.
///
/// # Errors
///
/// Returns [`FeedError`] on the first unparseable date; the aggregator keys on
/// real calendar dates, so this layer owns the conversion.
pub fn demand_records(days: &[ItemForecastDay]) -> Result<Vec<ForecastRecord>> {
    days.iter()
        .map(|day| {
            let date = parse_date(&day.date).ok_or_else(|| FeedError::MalformedDate {
                item_id: day.item_id.clone(),
                raw: day.date.clone(),
            })?;
            Ok(
                ForecastRecord::new(day.item_id.clone(), day.item_name.clone(), date, day.p50)
                    .with_upper(day.p90)
                    .with_sale_probability(day.sale_probability),
            )
        })
        .collect()
}
