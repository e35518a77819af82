//! Pure derivation stages: filter, then sort, then paginate. Export reads
//! the sorted sequence and skips pagination.
//!
//! Stages address rows by their index into [`Dataset::rows`] so derived
//! sequences stay cheap to compare and cache.
//!
//! [`Dataset::rows`]: crate::domain::entities::dataset::Dataset

pub mod export;
pub mod filter;
pub mod paginate;
pub mod sort;

pub use export::export_delimited;
pub use filter::filter_rows;
pub use paginate::{paginate, Page};
pub use sort::sort_rows;
