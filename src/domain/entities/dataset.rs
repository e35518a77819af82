use crate::domain::entities::cell::Cell;

pub type Row = Vec<Cell>;

/// Headers plus rows aligned positionally with them.
///
/// The engine takes ownership of a dataset and never edits it; every
/// derived view is a sequence of row indices into `rows`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    /// Builds a dataset of text cells.
    pub fn from_strings<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|v| Cell::Text(v.into())).collect())
                .collect(),
        }
    }

    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
