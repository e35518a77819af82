//! In-memory table view engine: filters, sorts and paginates a dataset and
//! exports the matching rows as delimited text.

pub mod config;
pub mod domain;
pub mod infra;
pub mod ui;
pub mod usecase;

pub use config::{EngineOptions, RowWidthPolicy};
pub use domain::entities::cell::Cell;
pub use domain::entities::dataset::{Dataset, Row};
pub use domain::entities::view::{FilterState, PaginationState, SortDirection, SortSpec, SortState};
pub use domain::error::ConfigError;
pub use usecase::engine::{StageRuns, TableEngine, TableEngineBuilder};
