//! Error kinds surfaced by the loading and aggregation pipeline.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BikeshareError {
    /// The city's source file is missing or unreadable.
    #[error("trip data unavailable at {path}: {source}")]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `Start Time` cell could not be parsed. `line` is 1-based and counts the header.
    #[error("malformed start time {value:?} on line {line}")]
    MalformedTimestamp { line: u64, value: String },

    #[error("malformed trip record on line {line}: {source}")]
    MalformedRecord {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("required column {0:?} not found in header")]
    MissingColumn(&'static str),

    #[error("invalid city configuration: {0}")]
    Config(String),

    /// An aggregate was requested over an empty selection.
    #[error("no trips match the selected filters")]
    NoData,
}

impl BikeshareError {
    pub fn is_no_data(&self) -> bool {
        matches!(self, BikeshareError::NoData)
    }
}

pub type Result<T> = std::result::Result<T, BikeshareError>;
