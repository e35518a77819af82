use std::fmt::Write as _;

use crate::usecase::engine::TableEngine;

pub const EMPTY_PAGE_TEXT: &str = "No data found.";

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

fn header_label(engine: &TableEngine, header: &str) -> String {
    match engine.sort_indicator(header) {
        Some(indicator) => format!("{header} {indicator}"),
        None => header.to_string(),
    }
}

/// Plain-text rendering of the current page, with a pagination footer when
/// there is more than one page.
pub fn render_page(engine: &TableEngine) -> String {
    let labels: Vec<String> = engine
        .headers()
        .iter()
        .map(|header| header_label(engine, header))
        .collect();
    let rows: Vec<Vec<String>> = engine
        .page_rows()
        .into_iter()
        .map(|row| {
            (0..labels.len())
                .map(|col_idx| row.get(col_idx).map(ToString::to_string).unwrap_or_default())
                .collect()
        })
        .collect();

    let widths: Vec<usize> = labels
        .iter()
        .enumerate()
        .map(|(col_idx, label)| {
            rows.iter()
                .map(|row| row[col_idx].chars().count())
                .chain(std::iter::once(label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let join = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", join(&labels));
    let _ = writeln!(
        out,
        "{}",
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-")
    );

    if rows.is_empty() {
        let _ = writeln!(out, "{EMPTY_PAGE_TEXT}");
    }
    for row in &rows {
        let _ = writeln!(out, "{}", join(row));
    }

    if engine.shows_pagination() {
        let _ = writeln!(
            out,
            "Page {} of {} ({} rows, showing {} per page)",
            engine.current_page(),
            engine.total_pages(),
            engine.matching_row_count(),
            engine.page_size()
        );
    }
    out
}
