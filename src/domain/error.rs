use thiserror::Error;

/// Rejected engine construction. These are the only errors surfaced to the
/// caller; everything else is handled inside the stage that sees it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("headers are required")]
    MissingHeaders,

    #[error("dataset is required")]
    MissingDataset,

    #[error("duplicate header: {0}")]
    DuplicateHeader(String),

    #[error("row {row} has {actual} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("at least one page size option is required")]
    NoPageSizes,

    #[error("page size options must be greater than zero")]
    ZeroPageSize,

    #[error("duplicate page size option: {0}")]
    DuplicatePageSize(usize),
}
