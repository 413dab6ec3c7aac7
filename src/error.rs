use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid {field} \"{input}\" (expected a non-negative number)")]
    InvalidAmount { field: &'static str, input: String },

    #[error("Purchases must be a whole number, got {input}")]
    FractionalPurchases { input: f64 },

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("Failed to save entries to {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("No data to export")]
    NoData,

    #[error("Cancelled, nothing was changed")]
    Cancelled,

    #[error("Failed to serialize entries: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{0}")]
    Import(#[from] ImportError),

    #[error("{0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub(crate) enum ImportError {
    #[error("Invalid backup file: {0}")]
    Json(serde_json::Error),

    #[error("Invalid backup file: expected a JSON array of entries")]
    NotArray,

    #[error("Invalid backup file: entry {index} is missing \"{field}\"")]
    MissingField { index: usize, field: &'static str },

    #[error("Invalid backup file: entry {index}: {message}")]
    InvalidEntry { index: usize, message: String },
}

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("No entry with id {id}")]
    NotFound { id: String },

    #[error("Id prefix {prefix} matches {count} entries")]
    Ambiguous { prefix: String, count: usize },
}
