use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::config::{DEFAULT_DELIMITER, DEFAULT_EXPORT_FILE_NAME};
use crate::usecase::engine::TableEngine;

/// Writes the engine's full filtered and sorted set to a file.
pub struct ExportService {
    delimiter: u8,
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl ExportService {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn default_path(dir: &Path) -> PathBuf {
        dir.join(DEFAULT_EXPORT_FILE_NAME)
    }

    pub fn export_to_path(&self, engine: &TableEngine, path: &Path) -> Result<usize> {
        let text = engine.export_delimited_text(self.delimiter)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create parent dir: {}", parent.display()))?;
        }
        fs::write(path, text)
            .with_context(|| format!("failed to write export: {}", path.display()))?;

        let row_count = engine.matching_row_count();
        info!("exported {row_count} rows to {}", path.display());
        Ok(row_count)
    }
}
