//! Error types for dashboard construction.
//!
//! Every variant here is a startup-time failure: the dataset could not be
//! loaded or a chart was bound inconsistently. None of them are recovered
//! from at request time.

use thiserror::Error;

use crate::dataset::Field;

/// Dashboard error type.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Reading the dataset file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset parsing or figure serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A column name does not match any dataset field.
    #[error("Unknown dataset field: {0}")]
    UnknownField(String),

    /// The dataset contained no records.
    #[error("Dataset is empty")]
    EmptyDataset,

    /// A derived series does not line up with the chart's rows.
    #[error("Channel `{channel}` has {actual} values, expected {expected}")]
    ChannelLength {
        /// Name of the offending channel.
        channel: String,
        /// Number of rows in the chart's data.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// A text column was bound where only numbers make sense.
    #[error("Channel `{channel}` needs a numeric field, got `{field}`")]
    NonNumericField {
        /// Channel or operation that needs numbers.
        channel: &'static str,
        /// The text field that was supplied.
        field: Field,
    },

    /// A chart was built without one of its required channels.
    #[error("Chart is missing required channel `{0}`")]
    MissingChannel(&'static str),
}

/// Result type alias for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;
