//! The built-in fruit dataset.
//!
//! Source: the `fruits.csv` sample from knadh/xmlutils.py, with columns
//! `id,name,price,quantity`. It is compiled into the binary and is the only
//! input the catalog reads.

use crate::domain::CsvTable;
use crate::error::AppError;
use crate::io::table::parse_text;

pub const FRUITS_CSV: &str = include_str!("fruits.csv");

/// Parse the built-in dataset.
pub fn load_fruit_table() -> Result<CsvTable, AppError> {
    parse_text(FRUITS_CSV)
}
