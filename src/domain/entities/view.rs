use std::collections::BTreeMap;

/// Global filter plus per-column filters. Empty text means no constraint,
/// so empty column entries are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub global: String,
    columns: BTreeMap<String, String>,
}

impl FilterState {
    pub fn column(&self, header: &str) -> &str {
        self.columns.get(header).map(String::as_str).unwrap_or("")
    }

    pub fn columns(&self) -> &BTreeMap<String, String> {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.columns.is_empty()
    }

    pub fn with_global(&self, text: &str) -> Self {
        Self {
            global: text.to_string(),
            columns: self.columns.clone(),
        }
    }

    pub fn with_column(&self, header: &str, text: &str) -> Self {
        let mut columns = self.columns.clone();
        if text.is_empty() {
            columns.remove(header);
        } else {
            columns.insert(header.to_string(), text.to_string());
        }
        Self {
            global: self.global.clone(),
            columns,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn indicator(self) -> char {
        match self {
            SortDirection::Asc => '▲',
            SortDirection::Desc => '▼',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

/// At most one active sort column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    pub active: Option<SortSpec>,
}

impl SortState {
    /// State after a click on `header`: a new column starts ascending, the
    /// active column alternates between ascending and descending.
    pub fn toggled(&self, header: &str) -> Self {
        let direction = match &self.active {
            Some(spec) if spec.column == header && spec.direction == SortDirection::Asc => {
                SortDirection::Desc
            }
            _ => SortDirection::Asc,
        };
        Self {
            active: Some(SortSpec {
                column: header.to_string(),
                direction,
            }),
        }
    }

    pub fn direction_of(&self, header: &str) -> Option<SortDirection> {
        self.active
            .as_ref()
            .filter(|spec| spec.column == header)
            .map(|spec| spec.direction)
    }
}

/// Current page (1-indexed) and page size. Total pages are derived from the
/// sorted row count and never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: usize,
    pub page_size: usize,
}

impl PaginationState {
    pub fn first(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }

    pub fn at_page(self, current_page: usize) -> Self {
        Self {
            current_page,
            page_size: self.page_size,
        }
    }
}
