//! The catalog workflow, independent of where its inputs come from:
//! CSV table -> enrichment -> JSON array
//!
//! The binary wires in the live dictionary client and stdout; tests wire in
//! stubs and buffers.

use std::io::Write;

use crate::data::DefinitionLookup;
use crate::domain::{CsvTable, Fruit};
use crate::enrich::{Randomness, enrich_rows};
use crate::error::AppError;
use crate::io::json::encode_records;

/// All computed outputs of one catalog run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub fruits: Vec<Fruit>,
    pub json: String,
}

/// Enrich `table` and encode the result. Nothing is returned on failure.
pub fn run_catalog<L, R, W>(
    table: &CsvTable,
    lookup: &L,
    rng: &mut R,
    diagnostics: &mut W,
) -> Result<RunOutput, AppError>
where
    L: DefinitionLookup + ?Sized,
    R: Randomness + ?Sized,
    W: Write + ?Sized,
{
    let fruits = enrich_rows(table, lookup, rng, diagnostics)?;
    let json = encode_records(&fruits)?;
    Ok(RunOutput { fruits, json })
}
