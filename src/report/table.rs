// src/report/table.rs
use crate::health::CheckResult;
use std::io::{self, Write};

/// Spaces between aligned columns.
const PADDING: usize = 3;

const HEADER: [&str; 3] = ["SERVICE", "URL", "STATUS"];

/// Write results as an aligned SERVICE / URL / STATUS table.
///
/// Every column but the last is padded to its widest cell plus `PADDING`;
/// the status column is written as-is.
pub fn render_table<W: Write>(results: &[CheckResult], out: &mut W) -> io::Result<()> {
    let rows: Vec<[&str; 3]> = std::iter::once(HEADER)
        .chain(results.iter().map(|r| [r.name(), r.url(), r.reason()]))
        .collect();

    let name_width = column_width(&rows, 0);
    let url_width = column_width(&rows, 1);

    for [name, url, status] in &rows {
        writeln!(
            out,
            "{}{}{}",
            pad(name, name_width),
            pad(url, url_width),
            status
        )?;
    }

    out.flush()
}

fn column_width(rows: &[[&str; 3]], column: usize) -> usize {
    rows.iter()
        .map(|row| row[column].chars().count())
        .max()
        .unwrap_or(0)
        + PADDING
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    format!("{}{}", cell, " ".repeat(fill))
}
