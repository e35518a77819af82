use crate::domain::entities::view::PaginationState;

/// One window of the ordered rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub rows: Vec<usize>,
    /// Zero only when there are no rows at all.
    pub total_pages: usize,
}

pub fn total_pages(row_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    row_count.div_ceil(page_size)
}

/// Half-open slice `[(page-1)*size, page*size)`, truncated at the end.
pub fn paginate(rows: &[usize], state: PaginationState) -> Page {
    let total_pages = total_pages(rows.len(), state.page_size);
    let start = state
        .current_page
        .saturating_sub(1)
        .saturating_mul(state.page_size)
        .min(rows.len());
    let end = start.saturating_add(state.page_size).min(rows.len());

    Page {
        rows: rows[start..end].to_vec(),
        total_pages,
    }
}
