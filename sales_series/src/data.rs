//! Record types for sparse, date-keyed model series and the merged wide table

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Accepted input date formats. ISO is the expected normal case; the two
/// alternates cover callers that feed dates straight from older exports.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a collaborator-supplied date string into a calendar date.
///
/// Returns `None` when the text matches none of the accepted formats.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// A single field value in a point or a merged row.
///
/// `Null` means the source explicitly reported no value ("present-but-null").
/// Absence of data is modelled by the field key missing from the map, never by
/// a `Null` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Numeric reading (revenue, order count, temperature, quantile value)
    Number(f64),
    /// Categorical reading (e.g. a rain category)
    Text(String),
    /// Explicitly reported as "no value"
    Null,
}

impl FieldValue {
    /// Numeric view of the value, if it is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Text view of the value, if it is categorical.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// True for the explicit present-but-null marker.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

/// One dated observation from a single source.
///
/// `date` is kept as the raw collaborator text and parsed at merge time.
/// `value` is the source's primary metric: `None` means the point carries no
/// primary metric at all (covariate-only point), `Some(FieldValue::Null)`
/// means the source reported an explicit null for that date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatePoint {
    /// Calendar date as supplied by the source
    pub date: String,
    /// Primary metric for this date, if the source carries one
    pub value: Option<FieldValue>,
    /// Auxiliary covariates (temperature, rain category, ...)
    #[serde(default)]
    pub extras: BTreeMap<String, FieldValue>,
}

impl DatePoint {
    /// Point with a numeric primary value.
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value: Some(FieldValue::Number(value)),
            extras: BTreeMap::new(),
        }
    }

    /// Point whose source explicitly reported no value for this date.
    pub fn reported_null(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            value: Some(FieldValue::Null),
            extras: BTreeMap::new(),
        }
    }

    /// Point carrying covariates only, with no primary metric.
    pub fn covariates_only(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            value: None,
            extras: BTreeMap::new(),
        }
    }

    /// Attach an auxiliary covariate to the point.
    pub fn with_extra(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.extras.insert(name.into(), value.into());
        self
    }
}

/// A sparse date-keyed series produced by exactly one named source
/// (e.g. "historical", "weekday_avg", "prophet", "gp_lower", "backtest_p50").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSeries {
    /// Source name; unique within one merge call
    pub name: String,
    /// Observations in no particular order; dates must be unique
    pub points: Vec<DatePoint>,
}

impl NamedSeries {
    /// Create a series from its source name and points.
    pub fn new(name: impl Into<String>, points: Vec<DatePoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Returns the number of points in the series.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One reconciled row of the merged wide table.
///
/// Field keys follow the merge conventions: each source's primary value lands
/// under the source name, precedence-resolved shared covariates under their
/// bare field name, other covariates under `"{source}.{name}"`, and continuity
/// outputs under their configured unified name. A missing key means no source
/// covers this date for that field, as distinct from a [`FieldValue::Null`]
/// entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeRow {
    /// Calendar date of the row
    pub date: NaiveDate,
    /// Field name to value mapping
    pub fields: BTreeMap<String, FieldValue>,
}

impl MergeRow {
    /// Empty row for a date.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            fields: BTreeMap::new(),
        }
    }

    /// Value of a field, if any source populated it.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Numeric value of a field, if present and numeric.
    pub fn number(&self, field: &str) -> Option<f64> {
        self.fields.get(field).and_then(FieldValue::as_f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_and_tolerated_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        assert_eq!(parse_date("2024-06-02"), Some(expected));
        assert_eq!(parse_date("2024/06/02"), Some(expected));
        assert_eq!(parse_date("06/02/2024"), Some(expected));
        assert_eq!(parse_date(" 2024-06-02 "), Some(expected));
    }

    #[test]
    fn rejects_garbage_dates() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date("2024-13-40"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn null_is_distinct_from_absent() {
        let mut row = MergeRow::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        row.fields
            .insert("historical".to_string(), FieldValue::Null);

        assert!(row.get("historical").is_some_and(FieldValue::is_null));
        assert!(row.get("prophet").is_none());
        assert_eq!(row.number("historical"), None);
    }

    #[test]
    fn field_value_json_shapes() {
        let n: FieldValue = serde_json::from_str("42.5").unwrap();
        let t: FieldValue = serde_json::from_str("\"light\"").unwrap();
        let z: FieldValue = serde_json::from_str("null").unwrap();
        assert_eq!(n, FieldValue::Number(42.5));
        assert_eq!(t, FieldValue::Text("light".to_string()));
        assert_eq!(z, FieldValue::Null);
    }
}
