//! Turn parsed CSV rows into `Fruit` records.
//!
//! Per row, in order:
//! 1) write the name to the diagnostic sink
//! 2) look up a definition (and write it if usable)
//! 3) price = CSV price + uniform offset in `[0, 1)`, left unrounded
//! 4) supplier category = uniform in `0..4`
//! 5) quantity = CSV quantity as `i32`
//!
//! Any failure aborts the whole batch; there is no per-row recovery.

use std::io::Write;

use crate::data::DefinitionLookup;
use crate::domain::{CsvTable, Fruit, SUPPLIER_CATEGORIES};
use crate::error::{AppError, ErrorKind};

pub mod randomness;

pub use randomness::{Randomness, RngRandomness};

/// Minimum cells per body row: id, name, price, quantity.
const MIN_CELLS: usize = 4;

/// Enrich every body row of `table`, in row order.
pub fn enrich_rows<L, R, W>(
    table: &CsvTable,
    lookup: &L,
    rng: &mut R,
    diagnostics: &mut W,
) -> Result<Vec<Fruit>, AppError>
where
    L: DefinitionLookup + ?Sized,
    R: Randomness + ?Sized,
    W: Write + ?Sized,
{
    let mut fruits = Vec::with_capacity(table.len());
    for (idx, row) in table.rows.iter().enumerate() {
        // +2: 1-based lines, header on line 1.
        let line = idx + 2;
        fruits.push(enrich_row(row, line, lookup, rng, diagnostics)?);
    }
    tracing::info!(fruits = fruits.len(), "enrichment complete");
    Ok(fruits)
}

/// Enrich a single body row. `line` is only used in error messages.
pub fn enrich_row<L, R, W>(
    row: &[String],
    line: usize,
    lookup: &L,
    rng: &mut R,
    diagnostics: &mut W,
) -> Result<Fruit, AppError>
where
    L: DefinitionLookup + ?Sized,
    R: Randomness + ?Sized,
    W: Write + ?Sized,
{
    let [_id, name, price, quantity, ..] = row else {
        return Err(AppError::new(
            ErrorKind::Parse,
            format!(
                "Line {line}: expected at least {MIN_CELLS} cells (id, name, price, quantity), found {}.",
                row.len()
            ),
        ));
    };

    write_diagnostic(diagnostics, name)?;

    let raw = lookup.lookup(name)?;
    let description = match usable_description(&raw) {
        Some(text) => {
            write_diagnostic(diagnostics, text)?;
            text.to_string()
        }
        None => {
            tracing::debug!(fruit = %name, "no usable definition");
            String::new()
        }
    };

    let base_price = parse_price(price, line)?;
    let price = base_price + rng.unit_offset();
    let supplier_id = rng.category(SUPPLIER_CATEGORIES);
    let quantity = parse_quantity(quantity, line)?;

    tracing::debug!(fruit = %name, supplier_id, price, quantity, "enriched");
    Ok(Fruit::new(supplier_id, name.as_str(), description, price, quantity))
}

/// A looked-up definition is usable when it is non-empty and has no `{`.
///
/// A brace means extraction fell through and returned the raw response body.
pub fn usable_description(text: &str) -> Option<&str> {
    if text.is_empty() || text.contains('{') {
        None
    } else {
        Some(text)
    }
}

fn parse_price(raw: &str, line: usize) -> Result<f64, AppError> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AppError::new(
            ErrorKind::Parse,
            format!("Line {line}: invalid price '{raw}'."),
        )),
    }
}

fn parse_quantity(raw: &str, line: usize) -> Result<i32, AppError> {
    raw.parse::<i32>().map_err(|e| {
        AppError::new(
            ErrorKind::Parse,
            format!("Line {line}: invalid quantity '{raw}': {e}"),
        )
    })
}

fn write_diagnostic<W: Write + ?Sized>(out: &mut W, text: &str) -> Result<(), AppError> {
    writeln!(out, "{text}")
        .map_err(|e| AppError::new(ErrorKind::Output, format!("Failed to write diagnostics: {e}")))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::data::NoDefinitions;
    use crate::io::table::parse_lines;

    struct FixedLookup(HashMap<&'static str, &'static str>);

    impl DefinitionLookup for FixedLookup {
        fn lookup(&self, word: &str) -> Result<String, AppError> {
            Ok(self.0.get(word).copied().unwrap_or_default().to_string())
        }
    }

    struct FailingLookup;

    impl DefinitionLookup for FailingLookup {
        fn lookup(&self, word: &str) -> Result<String, AppError> {
            Err(AppError::new(ErrorKind::Lookup, format!("no route to {word}")))
        }
    }

    /// Replays fixed offsets and categories.
    struct Scripted {
        offsets: Vec<f64>,
        categories: Vec<i32>,
    }

    impl Randomness for Scripted {
        fn unit_offset(&mut self) -> f64 {
            self.offsets.remove(0)
        }

        fn category(&mut self, bound: i32) -> i32 {
            let c = self.categories.remove(0);
            assert!(c < bound);
            c
        }
    }

    fn table() -> CsvTable {
        parse_lines([
            r#""id","name","price","quantity""#,
            r#""1000","Apple","4","133""#,
            r#""1017","Feijoa","2","198""#,
        ])
        .unwrap()
    }

    fn lookup() -> FixedLookup {
        FixedLookup(HashMap::from([
            ("Apple", "A common, round fruit."),
            ("Feijoa", r#"{"title":"No Definitions Found"}"#),
        ]))
    }

    #[test]
    fn scripted_randomness_gives_exact_records() {
        let mut rng = Scripted {
            offsets: vec![0.5, 0.125],
            categories: vec![3, 0],
        };
        let mut diag: Vec<u8> = Vec::new();
        let fruits = enrich_rows(&table(), &lookup(), &mut rng, &mut diag).unwrap();

        assert_eq!(
            fruits,
            vec![
                Fruit::new(3, "Apple", "A common, round fruit.", 4.5, 133),
                Fruit::new(0, "Feijoa", "", 2.125, 198),
            ]
        );
    }

    #[test]
    fn diagnostics_list_names_and_usable_descriptions() {
        let mut rng = RngRandomness::from_seed(Some(3));
        let mut diag: Vec<u8> = Vec::new();
        enrich_rows(&table(), &lookup(), &mut rng, &mut diag).unwrap();
        assert_eq!(
            String::from_utf8(diag).unwrap(),
            "Apple\nA common, round fruit.\nFeijoa\n"
        );
    }

    #[test]
    fn price_is_not_rounded_before_encoding() {
        let mut rng = Scripted {
            offsets: vec![0.987654321],
            categories: vec![1],
        };
        let row: Vec<String> = ["1", "Lime", "3", "7"].map(String::from).to_vec();
        let fruit = enrich_row(&row, 2, &NoDefinitions, &mut rng, &mut std::io::sink()).unwrap();
        assert_eq!(fruit.price(), 3.0 + 0.987654321);
    }

    #[test]
    fn seeded_values_stay_in_range() {
        let table = crate::data::load_fruit_table().unwrap();
        let mut rng = RngRandomness::from_seed(Some(11));
        let fruits = enrich_rows(&table, &NoDefinitions, &mut rng, &mut std::io::sink()).unwrap();
        for (fruit, row) in fruits.iter().zip(&table.rows) {
            let base: f64 = row[2].parse().unwrap();
            assert!(fruit.price() >= base && fruit.price() <= base + 1.0);
            assert!((0..SUPPLIER_CATEGORIES).contains(&fruit.supplier_id()));
        }
    }

    #[test]
    fn short_row_is_a_parse_error() {
        let row: Vec<String> = ["1", "Apple", "4"].map(String::from).to_vec();
        let mut rng = RngRandomness::from_seed(Some(0));
        let err = enrich_row(&row, 5, &NoDefinitions, &mut rng, &mut std::io::sink()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.message().starts_with("Line 5:"));
    }

    #[test]
    fn bad_numbers_abort_the_batch() {
        let mut rng = RngRandomness::from_seed(Some(0));
        let bad_price = parse_lines([r#""id","name","price","quantity""#, r#""1","Apple","four","1""#]).unwrap();
        let err = enrich_rows(&bad_price, &NoDefinitions, &mut rng, &mut std::io::sink()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);

        let bad_qty = parse_lines([
            r#""id","name","price","quantity""#,
            r#""1","Apple","4","1""#,
            r#""2","Pear","3","1.5""#,
        ])
        .unwrap();
        let err = enrich_rows(&bad_qty, &NoDefinitions, &mut rng, &mut std::io::sink()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.message().contains("Line 3"));

        let nan = parse_lines([r#""id","name","price","quantity""#, r#""1","Apple","NaN","1""#]).unwrap();
        assert!(enrich_rows(&nan, &NoDefinitions, &mut rng, &mut std::io::sink()).is_err());
    }

    #[test]
    fn lookup_failure_is_fatal() {
        let mut rng = RngRandomness::from_seed(Some(0));
        let err = enrich_rows(&table(), &FailingLookup, &mut rng, &mut std::io::sink()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn usable_description_rules() {
        assert_eq!(usable_description("a fruit"), Some("a fruit"));
        assert_eq!(usable_description(""), None);
        assert_eq!(usable_description("[{\"word\":\"x\"}]"), None);
        assert_eq!(usable_description("closing } only"), Some("closing } only"));
    }
}
