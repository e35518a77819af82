use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use crate::domain::entities::cell::Cell;
use crate::domain::entities::dataset::Dataset;
use crate::usecase::ports::source::{DatasetSource, SourceError};

/// Delimited text file; the first record holds the headers.
pub struct CsvSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvSource {
    pub fn new(path: &Path) -> Self {
        let delimiter = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
            _ => b',',
        };
        Self {
            path: path.to_path_buf(),
            delimiter,
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl DatasetSource for CsvSource {
    fn load(&self) -> Result<Dataset, SourceError> {
        let origin = self.describe();
        let file = File::open(&self.path).map_err(|err| SourceError::Open {
            path: origin.clone(),
            message: err.to_string(),
        })?;
        read_delimited(file, self.delimiter, &origin)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Reads every record as text cells. Record widths are not enforced here;
/// the engine's row-width policy decides what a ragged row means.
pub fn read_delimited<R: Read>(
    input: R,
    delimiter: u8,
    origin: &str,
) -> Result<Dataset, SourceError> {
    let parse_error = |message: String| SourceError::Parse {
        path: origin.to_string(),
        message,
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .map_err(|err| parse_error(format!("failed to read headers: {err}")))?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.is_empty() {
        return Err(parse_error("header is required".to_string()));
    }

    let mut rows = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record =
            record.map_err(|err| parse_error(format!("failed to parse record {row_idx}: {err}")))?;
        rows.push(record.iter().map(Cell::text).collect());
    }

    Ok(Dataset::new(headers, rows))
}
