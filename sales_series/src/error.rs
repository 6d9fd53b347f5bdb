//! Error types for the sales_series crate

use chrono::NaiveDate;
use thiserror::Error;

/// Data-quality failure found while reading one source's series.
///
/// Malformed dates are recoverable at the granularity of a single point and
/// are reported through [`crate::MergeOutcome::rejected`]; duplicates are an
/// upstream data-generation bug and fail the whole call.
// Display/Error are implemented by hand because thiserror treats any field
// named `source` as the error cause, and `source` here is a data-source name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// A point's date failed to parse as a calendar date
    MalformedDate { source: String, raw: String },

    /// One series supplied two points for the same date
    DuplicateDate { source: String, date: NaiveDate },

    /// Two input series claim the same source name
    DuplicateSource { source: String },
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::MalformedDate { source, raw } => {
                write!(f, "series '{source}': unparseable date '{raw}'")
            }
            DataError::DuplicateDate { source, date } => {
                write!(f, "series '{source}': duplicate date {date}")
            }
            DataError::DuplicateSource { source } => {
                write!(f, "duplicate series name '{source}'")
            }
        }
    }
}

impl std::error::Error for DataError {}

/// Invalid caller-supplied merge configuration. Always fatal: indicates a
/// programmer error at the call site, not a data-quality problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A precedence list names a source that is not among the input series
    UnknownSource { source: String },

    /// A continuity pair references a field no input source can produce
    UnknownField { field: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::UnknownSource { source } => {
                write!(f, "weather precedence names unknown source '{source}'")
            }
            ConfigError::UnknownField { field } => {
                write!(f, "continuity pair references unknown field '{field}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Any failure from a merge call
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MergeError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type with our merge error
pub type Result<T> = std::result::Result<T, MergeError>;
