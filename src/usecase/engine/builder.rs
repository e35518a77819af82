use crate::config::{EngineOptions, RowWidthPolicy};
use crate::domain::entities::dataset::{Dataset, Row};
use crate::domain::error::ConfigError;
use crate::usecase::engine::TableEngine;

/// Collects the construction inputs; `build` refuses to run on a missing
/// header list or dataset.
#[derive(Debug, Clone, Default)]
pub struct TableEngineBuilder {
    headers: Option<Vec<String>>,
    rows: Option<Vec<Row>>,
    options: EngineOptions,
}

impl TableEngineBuilder {
    pub fn headers<I>(mut self, headers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn dataset(self, dataset: Dataset) -> Self {
        self.headers(dataset.headers).rows(dataset.rows)
    }

    pub fn page_size_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.options.page_size_options = options.into();
        self
    }

    pub fn row_width(mut self, policy: RowWidthPolicy) -> Self {
        self.options.row_width = policy;
        self
    }

    pub fn options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Result<TableEngine, ConfigError> {
        let headers = self.headers.ok_or(ConfigError::MissingHeaders)?;
        let rows = self.rows.ok_or(ConfigError::MissingDataset)?;
        TableEngine::new(Dataset::new(headers, rows), self.options)
    }
}
