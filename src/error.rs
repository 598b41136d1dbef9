//! Error types for the compounding calculator and its presentation layer

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CompoundingError>;

#[derive(Error, Debug)]
pub enum CompoundingError {
    /// A calculator input is outside its domain (negative, NaN or infinite)
    #[error("Invalid argument `{field}` = {value}: {reason}")]
    InvalidArgument {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A form input exceeds the limit enforced by the input widget
    #[error("`{field}` = {value} is out of range (max {max})")]
    OutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },

    #[error("Unknown chapter: {0}")]
    UnknownChapter(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CompoundingError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidArgument { field, value, reason }
    }
}
