//! Quoted-CSV reader for the fixed `"a","b","c"` line shape.
//!
//! This is deliberately not a general CSV parser:
//! - cells are separated by the literal three-character sequence `","`
//! - each cell loses at most one leading and one trailing `"`
//! - there is no escaping, so a quoted cell containing `","` is split
//!
//! The first line is the header. Body rows are never checked against the
//! header arity.

use crate::domain::{CsvTable, Row};
use crate::error::{AppError, ErrorKind};

const DELIMITER: &str = "\",\"";

/// Parse a sequence of lines into a header and body rows.
pub fn parse_lines<I, S>(lines: I) -> Result<CsvTable, AppError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut rows = lines.into_iter().map(|line| split_line(line.as_ref()));

    let header = rows
        .next()
        .ok_or_else(|| AppError::new(ErrorKind::InvalidInput, "No rows in CSV"))?;
    let rows: Vec<Row> = rows.collect();

    tracing::debug!(columns = header.len(), rows = rows.len(), "parsed CSV table");
    Ok(CsvTable { header, rows })
}

/// Parse a whole text blob, one row per `\n`-separated line.
///
/// Trailing empty lines are dropped, so a blob ending in a newline does not
/// grow an extra row. Interior empty lines are kept.
pub fn parse_text(text: &str) -> Result<CsvTable, AppError> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    parse_lines(lines)
}

fn split_line(line: &str) -> Row {
    line.split(DELIMITER).map(strip_quotes).collect()
}

fn strip_quotes(cell: &str) -> String {
    let cell = cell.strip_prefix('"').unwrap_or(cell);
    let cell = cell.strip_suffix('"').unwrap_or(cell);
    cell.to_string()
}
