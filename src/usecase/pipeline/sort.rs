use crate::domain::entities::cell::compare_cells;
use crate::domain::entities::dataset::Dataset;
use crate::domain::entities::view::{SortDirection, SortState};

/// Orders `rows` by the active sort column. Rows with equal keys keep their
/// input order in both directions.
pub fn sort_rows(dataset: &Dataset, rows: &[usize], state: &SortState) -> Vec<usize> {
    let mut ordered = rows.to_vec();
    let Some(spec) = &state.active else {
        return ordered;
    };
    let Some(col_idx) = dataset.column_index(&spec.column) else {
        return ordered;
    };

    let key = |row_idx: usize| dataset.rows.get(row_idx).and_then(|row| row.get(col_idx));
    // slice::sort_by is stable; reversing the comparator keeps ties in place.
    ordered.sort_by(|&a, &b| {
        let ordering = compare_cells(key(a), key(b));
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    ordered
}
