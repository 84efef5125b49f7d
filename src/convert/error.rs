use std::path::PathBuf;
use thiserror::Error;

/// Reason one data row was rejected. Recovered locally: the row is skipped
/// and the run continues.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),
    #[error("{field} is not a number: {value:?}")]
    Number { field: &'static str, value: String },
    #[error("{field} out of range: {value}")]
    Range { field: &'static str, value: f64 },
    #[error("malformed date-time (expected YYYY-MM-DD HH:MM:SS): {0:?}")]
    DateTime(String),
}

/// A rejected row: 1-based data row number plus the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub row: usize,
    pub error: RowError,
}

/// Whole-run failures. All abort the conversion; no output document is
/// written when any of these occur.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("header mismatch: found {found:?}")]
    Schema { found: String },
    #[error("no valid samples in input")]
    EmptyDataset,
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}
