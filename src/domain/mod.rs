//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the parsed CSV table (`CsvTable`, `Row`)
//! - the enriched record (`Fruit`)

pub mod types;

pub use types::*;
