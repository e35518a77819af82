use thiserror::Error;

use crate::domain::entities::dataset::Dataset;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to open {path}: {message}")]
    Open { path: String, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("sheet not found in {path}: {sheet}")]
    Sheet { path: String, sheet: String },

    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
}

/// Anything that can hand the engine a complete dataset.
pub trait DatasetSource {
    fn load(&self) -> Result<Dataset, SourceError>;

    /// Human-readable origin, used in log records.
    fn describe(&self) -> String;
}
