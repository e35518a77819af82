//! The table session: owns the dataset and the filter, sort and pagination
//! state, and keeps the derived view current after every mutation.

mod builder;
mod derived;

use std::collections::HashSet;
use std::ops::RangeInclusive;

use anyhow::Result;
use log::{debug, info, warn};

use crate::config::{EngineOptions, RowWidthPolicy, DEFAULT_DELIMITER};
use crate::domain::entities::cell::Cell;
use crate::domain::entities::dataset::Dataset;
use crate::domain::entities::view::{FilterState, PaginationState, SortState};
use crate::domain::error::ConfigError;
use crate::usecase::pipeline::{export_delimited, filter_rows, paginate, sort_rows, Page};

pub use builder::TableEngineBuilder;
use derived::Derived;

/// How many times each stage has run since construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageRuns {
    pub filter: usize,
    pub sort: usize,
    pub paginate: usize,
}

pub struct TableEngine {
    dataset: Dataset,
    page_size_options: Vec<usize>,
    filter: FilterState,
    sort: SortState,
    pagination: PaginationState,
    filtered: Derived<FilterState, Vec<usize>>,
    sorted: Derived<(u64, SortState), Vec<usize>>,
    page: Derived<(u64, PaginationState), Page>,
}

impl TableEngine {
    pub fn builder() -> TableEngineBuilder {
        TableEngineBuilder::default()
    }

    pub fn new(dataset: Dataset, options: EngineOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        validate_dataset(&dataset, options.row_width)?;
        let page_size = options.default_page_size().ok_or(ConfigError::NoPageSizes)?;

        let filter = FilterState::default();
        let sort = SortState::default();
        let pagination = PaginationState::first(page_size);

        let filtered = Derived::new(filter.clone(), |state| filter_rows(&dataset, state));
        let sorted = Derived::new((filtered.generation(), sort.clone()), |(_, state)| {
            sort_rows(&dataset, filtered.output(), state)
        });
        let page = Derived::new((sorted.generation(), pagination), |(_, state)| {
            paginate(sorted.output(), *state)
        });

        info!(
            "table engine ready: {} columns, {} rows, page size {page_size}",
            dataset.headers.len(),
            dataset.rows.len()
        );

        Ok(Self {
            dataset,
            page_size_options: options.page_size_options,
            filter,
            sort,
            pagination,
            filtered,
            sorted,
            page,
        })
    }

    pub fn set_global_filter(&mut self, text: &str) {
        self.filter = self.filter.with_global(text);
        self.pagination = self.pagination.at_page(1);
        self.refresh();
    }

    /// Returns `false` and changes nothing when `header` is not a column.
    pub fn set_column_filter(&mut self, header: &str, text: &str) -> bool {
        if self.dataset.column_index(header).is_none() {
            debug!("ignoring filter for unknown column: {header}");
            return false;
        }
        self.filter = self.filter.with_column(header, text);
        self.pagination = self.pagination.at_page(1);
        self.refresh();
        true
    }

    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
        self.pagination = self.pagination.at_page(1);
        self.refresh();
    }

    /// Header click. The current page is kept since sorting never changes
    /// the row count.
    pub fn toggle_sort(&mut self, header: &str) -> bool {
        if self.dataset.column_index(header).is_none() {
            debug!("ignoring sort on unknown column: {header}");
            return false;
        }
        self.sort = self.sort.toggled(header);
        self.refresh();
        true
    }

    /// Out-of-range pages are ignored.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let total_pages = self.total_pages();
        if page < 1 || page > total_pages {
            debug!("ignoring navigation to page {page} of {total_pages}");
            return false;
        }
        self.pagination = self.pagination.at_page(page);
        self.refresh();
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.pagination.current_page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.pagination.current_page.saturating_sub(1))
    }

    /// Only sizes from the allowed set are accepted; any accepted size sends
    /// the view back to page 1.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if !self.page_size_options.contains(&page_size) {
            debug!(
                "ignoring page size {page_size}, allowed: {:?}",
                self.page_size_options
            );
            return false;
        }
        self.pagination = PaginationState::first(page_size);
        self.refresh();
        true
    }

    fn refresh(&mut self) {
        let dataset = &self.dataset;

        if self
            .filtered
            .refresh(self.filter.clone(), |state| filter_rows(dataset, state))
        {
            debug!("filter stage: {} rows", self.filtered.output().len());
        }

        let filtered = self.filtered.output();
        if self
            .sorted
            .refresh((self.filtered.generation(), self.sort.clone()), |(_, state)| {
                sort_rows(dataset, filtered, state)
            })
        {
            debug!("sort stage: {:?}", self.sort.active);
        }

        let sorted = self.sorted.output();
        if self
            .page
            .refresh((self.sorted.generation(), self.pagination), |(_, state)| {
                paginate(sorted, *state)
            })
        {
            debug!(
                "pagination stage: page {} of {}",
                self.pagination.current_page,
                self.page.output().total_pages
            );
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.dataset.headers
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn page_rows(&self) -> Vec<&[Cell]> {
        self.rows_at(&self.page.output().rows).collect()
    }

    /// Every row that matches the filters, in sort order.
    pub fn sorted_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows_at(self.sorted.output())
    }

    pub fn matching_row_count(&self) -> usize {
        self.sorted.output().len()
    }

    pub fn total_pages(&self) -> usize {
        self.page.output().total_pages
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    pub fn pagination_state(&self) -> PaginationState {
        self.pagination
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages()
    }

    /// Pagination controls are only worth showing with more than one page.
    pub fn shows_pagination(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn is_first_page(&self) -> bool {
        self.pagination.current_page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.pagination.current_page >= self.total_pages()
    }

    pub fn sort_indicator(&self, header: &str) -> Option<char> {
        self.sort.direction_of(header).map(|direction| direction.indicator())
    }

    pub fn stage_runs(&self) -> StageRuns {
        StageRuns {
            filter: self.filtered.runs(),
            sort: self.sorted.runs(),
            paginate: self.page.runs(),
        }
    }

    /// The full filtered and sorted set as delimited text, independent of
    /// the current page.
    pub fn export_delimited_text(&self, delimiter: u8) -> Result<String> {
        export_delimited(self.headers(), self.sorted_rows(), delimiter)
    }

    pub fn export_csv(&self) -> Result<String> {
        self.export_delimited_text(DEFAULT_DELIMITER)
    }

    fn rows_at<'a>(&'a self, indices: &'a [usize]) -> impl Iterator<Item = &'a [Cell]> + 'a {
        indices
            .iter()
            .filter_map(|&row_idx| self.dataset.rows.get(row_idx).map(Vec::as_slice))
    }
}

fn validate_dataset(dataset: &Dataset, policy: RowWidthPolicy) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for header in &dataset.headers {
        if !seen.insert(header.as_str()) {
            return Err(ConfigError::DuplicateHeader(header.clone()));
        }
    }

    let expected = dataset.headers.len();
    for (row, cells) in dataset.rows.iter().enumerate() {
        if cells.len() == expected {
            continue;
        }
        match policy {
            RowWidthPolicy::Reject => {
                return Err(ConfigError::RowWidth {
                    row,
                    expected,
                    actual: cells.len(),
                })
            }
            RowWidthPolicy::Tolerate => warn!(
                "row {row} has {} cells, expected {expected}; keeping it",
                cells.len()
            ),
        }
    }

    Ok(())
}
