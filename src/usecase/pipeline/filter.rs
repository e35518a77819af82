use crate::domain::entities::cell::Cell;
use crate::domain::entities::dataset::Dataset;
use crate::domain::entities::view::FilterState;

/// Indices of the rows that pass both the global filter and every active
/// column filter, in dataset order.
pub fn filter_rows(dataset: &Dataset, state: &FilterState) -> Vec<usize> {
    if state.is_empty() {
        return (0..dataset.rows.len()).collect();
    }

    let global = state.global.to_lowercase();
    let column_terms: Vec<(usize, String)> = dataset
        .headers
        .iter()
        .enumerate()
        .filter_map(|(col_idx, header)| {
            let term = state.column(header);
            (!term.is_empty()).then(|| (col_idx, term.to_lowercase()))
        })
        .collect();

    dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| matches_global(row, &global) && matches_columns(row, &column_terms))
        .map(|(row_idx, _)| row_idx)
        .collect()
}

fn contains_folded(cell: &Cell, folded_term: &str) -> bool {
    cell.to_string().to_lowercase().contains(folded_term)
}

fn matches_global(row: &[Cell], folded_term: &str) -> bool {
    folded_term.is_empty() || row.iter().any(|cell| contains_folded(cell, folded_term))
}

fn matches_columns(row: &[Cell], column_terms: &[(usize, String)]) -> bool {
    column_terms.iter().all(|(col_idx, term)| {
        row.get(*col_idx)
            .is_some_and(|cell| contains_folded(cell, term))
    })
}
