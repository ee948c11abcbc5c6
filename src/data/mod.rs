//! Data sources: the built-in CSV and the definition service.

pub mod dataset;
pub mod dictionary;

pub use dataset::{FRUITS_CSV, load_fruit_table};
pub use dictionary::{DefinitionLookup, DictionaryClient, NoDefinitions, extract_definition};
