use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader};

use crate::domain::entities::cell::Cell;
use crate::domain::entities::dataset::Dataset;
use crate::usecase::ports::source::{DatasetSource, SourceError};

/// One worksheet of a spreadsheet file (xlsx, xls, xlsb, ods). The first
/// row holds the headers.
pub struct XlsxSource {
    path: PathBuf,
    sheet: Option<String>,
}

impl XlsxSource {
    pub fn new(path: &Path, sheet: Option<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            sheet,
        }
    }
}

impl DatasetSource for XlsxSource {
    fn load(&self) -> Result<Dataset, SourceError> {
        let origin = self.path.display().to_string();
        let mut workbook = open_workbook_auto(&self.path).map_err(|err| SourceError::Open {
            path: origin.clone(),
            message: err.to_string(),
        })?;

        let sheet = match &self.sheet {
            Some(sheet) => sheet.clone(),
            None => workbook
                .sheet_names()
                .first()
                .cloned()
                .ok_or_else(|| SourceError::Sheet {
                    path: origin.clone(),
                    sheet: "<first sheet>".to_string(),
                })?,
        };
        if !workbook.sheet_names().contains(&sheet) {
            return Err(SourceError::Sheet {
                path: origin,
                sheet,
            });
        }

        let range = workbook
            .worksheet_range(&sheet)
            .map_err(|err| SourceError::Parse {
                path: format!("{origin}#{sheet}"),
                message: err.to_string(),
            })?;

        let rows: Vec<Vec<Cell>> = range
            .rows()
            .map(|r| r.iter().map(cell_from_data).collect())
            .collect();
        dataset_from_rows(rows).ok_or_else(|| SourceError::Parse {
            path: format!("{origin}#{sheet}"),
            message: "header row is required".to_string(),
        })
    }

    fn describe(&self) -> String {
        match &self.sheet {
            Some(sheet) => format!("{}#{sheet}", self.path.display()),
            None => self.path.display().to_string(),
        }
    }
}

/// Keeps numbers and bools typed so they sort by value.
pub fn cell_from_data(cell: &Data) -> Cell {
    match cell {
        Data::String(v) => Cell::Text(v.to_string()),
        Data::Float(v) => Cell::Float(*v),
        Data::Int(v) => Cell::Int(*v),
        Data::Bool(v) => Cell::Bool(*v),
        Data::DateTime(v) => Cell::Text(v.to_string()),
        Data::DateTimeIso(v) => Cell::Text(v.to_string()),
        Data::DurationIso(v) => Cell::Text(v.to_string()),
        Data::Error(v) => Cell::Text(format!("{v:?}")),
        Data::Empty => Cell::Empty,
    }
}

/// Splits a sheet into headers and data rows. Trailing empty cells are
/// dropped from each data row's tail beyond the header width.
pub fn dataset_from_rows(mut rows: Vec<Vec<Cell>>) -> Option<Dataset> {
    if rows.is_empty() {
        return None;
    }
    let headers: Vec<String> = rows.remove(0).iter().map(ToString::to_string).collect();
    let width = headers.len();
    for row in &mut rows {
        while row.len() > width && matches!(row.last(), Some(Cell::Empty)) {
            row.pop();
        }
    }
    Some(Dataset::new(headers, rows))
}
