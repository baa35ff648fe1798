use std::path::PathBuf;
use thiserror::Error;

/// Any failure while loading the dataset. All of them are fatal: a table is
/// either loaded completely or not at all.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("Dataset file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read dataset file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Required column '{0}' is missing from the header row")]
    MissingColumn(String),

    #[error("Unparseable date '{value}' on line {line}")]
    InvalidDate { line: u64, value: String },

    #[error("Non-numeric value '{value}' in column '{column}' on line {line}")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },

    #[error("Absolute amounts summed up to line {line} exceed {limit}")]
    TotalOutOfRange { line: u64, limit: rust_decimal::Decimal },
}
