//! Outer-join of named model series into one dense, chronologically sorted table

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;

use crate::data::{parse_date, DatePoint, MergeRow, NamedSeries};
use crate::error::{ConfigError, DataError, Result};

/// Cross-source resolution for covariates that more than one source can
/// legitimately supply (temperature, rain category).
///
/// `fields` names the shared covariates; `sources` is the ordered list of
/// source names to consult per date. The first listed source that supplies the
/// field for a date wins; a present-but-null reading counts as supplied. A
/// source whose *name* equals a shared field contributes its primary value,
/// which covers standalone weather series.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherPrecedence {
    /// Shared covariate field names subject to resolution
    pub fields: Vec<String>,
    /// Source names to consult, highest priority first
    pub sources: Vec<String>,
}

impl WeatherPrecedence {
    /// Build a precedence from shared field names and an ordered source list.
    pub fn new<F, S>(fields: F, sources: S) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            sources: sources.into_iter().map(Into::into).collect(),
        }
    }

    /// Precedence that resolves nothing.
    pub fn none() -> Self {
        Self::default()
    }
}

/// A (primary, fallback) field pair stitched into one continuous output field.
///
/// Per date, the unified field takes the primary's value when present
/// (including present-but-null), else the fallback's, else stays absent. This
/// is what keeps a charted line seamless across the backtest/forecast
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuityPair {
    /// Field consulted first
    pub primary: String,
    /// Field consulted when the primary is absent for a date
    pub fallback: String,
    /// Name of the stitched output field
    pub unified: String,
}

impl ContinuityPair {
    /// Build a pair from its primary, fallback, and unified field names.
    pub fn new(
        primary: impl Into<String>,
        fallback: impl Into<String>,
        unified: impl Into<String>,
    ) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
            unified: unified.into(),
        }
    }
}

/// Result of a merge call: the dense table plus the individually rejected
/// malformed points that were skipped to keep the rest of the data usable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeOutcome {
    /// One row per distinct valid input date, ascending by date
    pub rows: Vec<MergeRow>,
    /// Points skipped because their date failed to parse
    pub rejected: Vec<DataError>,
}

/// Outer-join `series` on their date keys into one wide table.
///
/// Every distinct valid date across all inputs produces exactly one row.
/// Each source's primary value is written under the source's name; covariates
/// named in `weather` are resolved cross-source by its precedence order;
/// remaining covariates are namespaced as `"{source}.{name}"` so unrelated
/// same-named fields never merge. `continuity` pairs are applied last.
///
/// Malformed dates reject only the offending point (reported in
/// [`MergeOutcome::rejected`]).
///
/// # Errors
///
/// Returns [`DataError`] when a series contains two points for one date or two
/// series share a name, and [`ConfigError`] when `weather` names an unknown
/// source or a continuity pair references a field no input can produce. Both
/// abort the call with no partial output.
pub fn merge(
    series: &[NamedSeries],
    weather: &WeatherPrecedence,
    continuity: &[ContinuityPair],
) -> Result<MergeOutcome> {
    if series.is_empty() {
        return Ok(MergeOutcome::default());
    }

    let mut names: HashSet<&str> = HashSet::new();
    for s in series {
        if !names.insert(s.name.as_str()) {
            return Err(DataError::DuplicateSource {
                source: s.name.clone(),
            }
            .into());
        }
    }

    for source in &weather.sources {
        if !names.contains(source.as_str()) {
            return Err(ConfigError::UnknownSource {
                source: source.clone(),
            }
            .into());
        }
    }

    // Fields a continuity pair may legally reference: source values and
    // precedence-resolved shared fields.
    let mut known_fields = names;
    known_fields.extend(weather.fields.iter().map(String::as_str));
    for pair in continuity {
        for field in [&pair.primary, &pair.fallback] {
            if !known_fields.contains(field.as_str()) {
                return Err(ConfigError::UnknownField {
                    field: field.clone(),
                }
                .into());
            }
        }
    }

    // Parse every series up front so a duplicate date aborts before any row
    // is built.
    let mut rejected: Vec<DataError> = Vec::new();
    let mut parsed: Vec<BTreeMap<NaiveDate, &DatePoint>> = Vec::with_capacity(series.len());
    for s in series {
        let mut by_date: BTreeMap<NaiveDate, &DatePoint> = BTreeMap::new();
        for point in &s.points {
            let Some(date) = parse_date(&point.date) else {
                rejected.push(DataError::MalformedDate {
                    source: s.name.clone(),
                    raw: point.date.clone(),
                });
                continue;
            };
            if by_date.insert(date, point).is_some() {
                return Err(DataError::DuplicateDate {
                    source: s.name.clone(),
                    date,
                }
                .into());
            }
        }
        parsed.push(by_date);
    }

    // Union of all dates, one row each.
    let mut rows: BTreeMap<NaiveDate, MergeRow> = BTreeMap::new();
    for (s, by_date) in series.iter().zip(&parsed) {
        for (&date, point) in by_date {
            let row = rows.entry(date).or_insert_with(|| MergeRow::new(date));
            if let Some(value) = &point.value {
                row.fields.insert(s.name.clone(), value.clone());
            }
            for (name, value) in &point.extras {
                if weather.fields.contains(name) {
                    // resolved below by precedence order
                    continue;
                }
                row.fields
                    .insert(format!("{}.{}", s.name, name), value.clone());
            }
        }
    }

    // Shared covariates: walk the precedence order per date, first supplier
    // wins. The order of `series` never matters here.
    let index_of: HashMap<&str, usize> = series
        .iter()
        .enumerate()
        .map(|(i, s)| (s.name.as_str(), i))
        .collect();
    for (&date, row) in &mut rows {
        for field in &weather.fields {
            for source in &weather.sources {
                let Some(point) = parsed[index_of[source.as_str()]].get(&date) else {
                    continue;
                };
                let candidate = point.extras.get(field).or_else(|| {
                    if source == field {
                        point.value.as_ref()
                    } else {
                        None
                    }
                });
                if let Some(value) = candidate {
                    row.fields.insert(field.clone(), value.clone());
                    break;
                }
            }
        }
    }

    // Continuity stitching runs last so it can read resolved fields too.
    for row in rows.values_mut() {
        for pair in continuity {
            let chosen = row
                .fields
                .get(&pair.primary)
                .or_else(|| row.fields.get(&pair.fallback))
                .cloned();
            if let Some(value) = chosen {
                row.fields.insert(pair.unified.clone(), value);
            }
        }
    }

    Ok(MergeOutcome {
        rows: rows.into_values().collect(),
        rejected,
    })
}
