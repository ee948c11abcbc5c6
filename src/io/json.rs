//! Minimal JSON array encoder for flat records.
//!
//! Records describe themselves through [`JsonRecord`]: an ordered list of
//! named scalar fields. The encoder writes them out in that order and knows
//! exactly four scalar kinds (string, bool, 32/64-bit integer, double).
//! Anything else is rejected with `ErrorKind::UnsupportedType`.
//!
//! Limitations kept on purpose for output compatibility:
//! - strings are written raw, without escaping quotes or control characters
//! - doubles always carry exactly two fraction digits (see [`format_double`])

use crate::error::{AppError, ErrorKind};

/// Whether a field belongs to each value or to the record type as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldScope {
    Instance,
    /// Type-level constants are described for completeness but never encoded.
    TypeLevel,
}

/// A single field value as seen by the encoder.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Bool(bool),
    Int(i32),
    Long(i64),
    Double(f64),
    /// A field whose type has no JSON encoding here (nested records, lists, ...).
    Unsupported { type_name: &'static str },
    /// A field whose value could not be read.
    Unreadable { reason: String },
}

impl FieldValue<'_> {
    pub fn unsupported<T: ?Sized>() -> Self {
        FieldValue::Unsupported {
            type_name: std::any::type_name::<T>(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field<'a> {
    pub name: &'static str,
    pub value: FieldValue<'a>,
    pub scope: FieldScope,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, value: FieldValue<'a>) -> Self {
        Self {
            name,
            value,
            scope: FieldScope::Instance,
        }
    }

    pub fn type_level(name: &'static str, value: FieldValue<'a>) -> Self {
        Self {
            name,
            value,
            scope: FieldScope::TypeLevel,
        }
    }
}

/// A record that can be written as one flat JSON object.
pub trait JsonRecord {
    /// Fields in declaration order. The encoder never reorders them.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// Encode records as a JSON array, preserving input order.
pub fn encode_records<R: JsonRecord>(records: &[R]) -> Result<String, AppError> {
    encode_optional(Some(records))
}

/// Encode an optional record list. An absent list encodes as `[]`.
pub fn encode_optional<R: JsonRecord>(records: Option<&[R]>) -> Result<String, AppError> {
    let mut out = String::from("[");
    if let Some(records) = records {
        let objects = records
            .iter()
            .map(encode_record)
            .collect::<Result<Vec<_>, _>>()?;
        out.push_str(&objects.join(","));
    }
    out.push(']');
    Ok(out)
}

/// Encode one record as a JSON object.
pub fn encode_record<R: JsonRecord + ?Sized>(record: &R) -> Result<String, AppError> {
    let mut members = Vec::new();
    for field in record.fields() {
        if field.scope == FieldScope::TypeLevel {
            continue;
        }
        members.push(encode_field(&field)?);
    }
    Ok(format!("{{{}}}", members.join(",")))
}

fn encode_field(field: &Field<'_>) -> Result<String, AppError> {
    let name = field.name;
    match &field.value {
        FieldValue::Str(v) => Ok(format!("\"{name}\":\"{v}\"")),
        FieldValue::Bool(v) => Ok(format!("\"{name}\":{}", if *v { "true" } else { "false" })),
        FieldValue::Int(v) => Ok(format!("\"{name}\":{v}")),
        FieldValue::Long(v) => Ok(format!("\"{name}\":{v}")),
        FieldValue::Double(v) => Ok(format!("\"{name}\":{}", format_double(*v))),
        FieldValue::Unsupported { type_name } => Err(AppError::new(
            ErrorKind::UnsupportedType,
            format!("Unsupported type {type_name} attempted to serialize to JSON."),
        )),
        FieldValue::Unreadable { reason } => {
            tracing::debug!(field = name, %reason, "field read failed");
            Err(AppError::new(
                ErrorKind::Serialization,
                format!("Unexpected error attempting to serialize to JSON for field {name}."),
            ))
        }
    }
}

/// Format a double with exactly two fraction digits.
///
/// Rounding works on the shortest decimal string that round-trips to `value`
/// and goes half-up (away from zero): `4.005 -> 4.01`, `4.0049 -> 4.00`,
/// `-4.005 -> -4.01`. Non-finite values render as `NaN`, `Infinity` and
/// `-Infinity`.
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // `Display` for f64 is the shortest round-trip form and never uses an exponent.
    let shortest = value.to_string();
    let (negative, unsigned) = match shortest.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, shortest.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut digits: Vec<u8> = int_part.bytes().collect();
    let frac = frac_part.as_bytes();
    for i in 0..2 {
        digits.push(frac.get(i).copied().unwrap_or(b'0'));
    }

    if frac.get(2).is_some_and(|d| *d >= b'5') {
        round_up(&mut digits);
    }

    let split = digits.len() - 2;
    let mut out = String::with_capacity(digits.len() + 2);
    if negative {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|d| *d as char));
    out.push('.');
    out.extend(digits[split..].iter().map(|d| *d as char));
    out
}

/// Add one unit in the last place to a string of ASCII digits.
fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
