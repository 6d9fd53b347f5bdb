//! Error types for the menu_forecast crate

use thiserror::Error;

/// Failure while converting a collaborator payload into core inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// A per-item forecast day carried an unparseable date
    #[error("per-item forecast for '{item_id}': unparseable date '{raw}'")]
    MalformedDate { item_id: String, raw: String },
}

/// Result type with our feed error
pub type Result<T> = std::result::Result<T, FeedError>;
