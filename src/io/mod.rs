//! Input/output helpers.
//!
//! - quoted-CSV reader (`table`)
//! - flat record JSON encoder (`json`)

pub mod json;
pub mod table;

pub use json::*;
pub use table::*;
