use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::domain::entities::dataset::Dataset;
use crate::infra::import::csv::CsvSource;
use crate::infra::import::xlsx::XlsxSource;
use crate::usecase::ports::source::{DatasetSource, SourceError};

const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

pub struct ImportService {
    path: PathBuf,
    sheet: Option<String>,
}

impl ImportService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sheet: None,
        }
    }

    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = sheet;
        self
    }

    /// Picks a loader from the file extension.
    pub fn source(&self) -> Result<Box<dyn DatasetSource>, SourceError> {
        let extension = extension_of(&self.path);
        match extension.as_str() {
            "csv" | "tsv" | "txt" => Ok(Box::new(CsvSource::new(&self.path))),
            ext if SPREADSHEET_EXTENSIONS.contains(&ext) => Ok(Box::new(XlsxSource::new(
                &self.path,
                self.sheet.clone(),
            ))),
            _ => Err(SourceError::UnsupportedFormat(
                self.path.display().to_string(),
            )),
        }
    }

    pub fn import(&self) -> Result<Dataset> {
        let source = self.source()?;
        let dataset = source
            .load()
            .with_context(|| format!("failed to import {}", source.describe()))?;
        info!(
            "imported {}: {} columns, {} rows",
            source.describe(),
            dataset.headers.len(),
            dataset.rows.len()
        );
        Ok(dataset)
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default()
}
