//! Error types for the data-loader crate.
//!
//! Loading is all-or-nothing: any of the startup variants below means no
//! corpus is produced. `InvalidCategory` is the one caller-facing variant,
//! raised by the option index for unsupported category names.

use thiserror::Error;

use crate::types::RankingMode;

/// Errors that can occur while loading the corpus or querying its options
///
/// `FileNotFound`, `Csv` and `Io` are data source failures, `MissingColumn`
/// is a schema failure. All of them are fatal at startup.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Dataset file could not be found
    #[error("Dataset file not found: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the dataset
    #[error("I/O error while reading the dataset")]
    IoError(#[from] std::io::Error),

    /// The CSV stream itself is malformed (bad quoting, invalid UTF-8, ...)
    #[error("Malformed dataset")]
    Csv(#[from] csv::Error),

    /// A column the active ranking mode depends on is absent after renaming
    #[error("Dataset has no '{column}' column (source header '{source_header}'), required for {mode} mode")]
    MissingColumn {
        column: &'static str,
        source_header: &'static str,
        mode: RankingMode,
    },

    /// Options were requested for a category the corpus does not expose
    #[error("Category '{category}' is not valid. Use one of: {supported}")]
    InvalidCategory { category: String, supported: String },
}

impl DataLoadError {
    /// True for errors caused by caller input rather than by the dataset
    pub fn is_caller_error(&self) -> bool {
        matches!(self, DataLoadError::InvalidCategory { .. })
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
