//! Shared domain types.
//!
//! - `CsvTable`: the raw, untyped output of the CSV reader
//! - `Fruit`: the enriched record that ends up in the JSON output
//! - `CatalogConfig`: resolved run settings

use std::time::Duration;

use crate::io::json::{Field, FieldValue, JsonRecord};

/// Settings for one catalog run, resolved from CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Skip the dictionary service entirely.
    pub offline: bool,
    pub connect_timeout: Duration,
    /// Overrides the environment/default base URL when set.
    pub api_base: Option<String>,
}

/// One parsed CSV line: ordered string cells, no schema.
pub type Row = Vec<String>;

/// Header row plus body rows.
///
/// The header is trusted blindly: body rows may have more or fewer cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub header: Row,
    pub rows: Vec<Row>,
}

impl CsvTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Number of supplier categories; `supplier_id` is always in `0..SUPPLIER_CATEGORIES`.
pub const SUPPLIER_CATEGORIES: i32 = 4;

/// An enriched fruit record.
///
/// Fields are private so a `Fruit` cannot change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Fruit {
    supplier_id: i32,
    name: String,
    description: String,
    price: f64,
    quantity: i32,
}

impl Fruit {
    pub fn new(
        supplier_id: i32,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i32,
    ) -> Self {
        Self {
            supplier_id,
            name: name.into(),
            description: description.into(),
            price,
            quantity,
        }
    }

    pub fn supplier_id(&self) -> i32 {
        self.supplier_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Unrounded price; rounding to cents happens only in the JSON encoder.
    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }
}

impl JsonRecord for Fruit {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("supplierId", FieldValue::Int(self.supplier_id)),
            Field::new("name", FieldValue::Str(&self.name)),
            Field::new("description", FieldValue::Str(&self.description)),
            Field::new("price", FieldValue::Double(self.price)),
            Field::new("quantity", FieldValue::Int(self.quantity)),
        ]
    }
}
