//! Errors for reading validation and dataset loading

use thiserror::Error;

use crate::types::Gas;

pub type SpoilageResult<T> = Result<T, SpoilageError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpoilageError {
    /// Negative or non-finite concentration
    #[error("Invalid {gas} reading: {value} (must be a finite, non-negative ppm value)")]
    InvalidReading { gas: Gas, value: f64 },

    /// Dataset row that cannot become a `DatasetRow`
    #[error("Malformed dataset row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("Dataset header is missing column '{0}'")]
    MissingColumn(String),

    #[error("Dataset unreadable: {0}")]
    DatasetIo(String),
}

impl From<std::io::Error> for SpoilageError {
    fn from(err: std::io::Error) -> Self {
        SpoilageError::DatasetIo(err.to_string())
    }
}
