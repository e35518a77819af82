use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::domain::entities::cell::Cell;

/// Renders headers plus rows as delimited text, one line per row.
///
/// Plain cells are joined as-is; a cell holding the delimiter, a quote or a
/// line break is quoted. Short rows are padded with empty fields. The last
/// line has no trailing newline.
pub fn export_delimited<'a, I>(headers: &[String], rows: I, delimiter: u8) -> Result<String>
where
    I: IntoIterator<Item = &'a [Cell]>,
{
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Necessary)
        .flexible(true)
        .from_writer(Vec::new());

    writer
        .write_record(headers)
        .context("failed to write export header")?;

    for (row_idx, row) in rows.into_iter().enumerate() {
        let mut fields: Vec<String> = row.iter().map(ToString::to_string).collect();
        if fields.len() < headers.len() {
            fields.resize(headers.len(), String::new());
        }
        writer
            .write_record(&fields)
            .with_context(|| format!("failed to write export row {row_idx}"))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("failed to flush export: {}", err.error()))?;
    let mut text = String::from_utf8(bytes).context("export produced invalid utf-8")?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
