//! `fruit-catalog` library crate.
//!
//! The binary (`fruits`) is a thin wrapper around this library so that:
//!
//! - the pipeline is testable with stubbed lookups and scripted randomness
//! - no test needs network access or a spawned process

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod enrich;
pub mod error;
pub mod io;
pub mod logging;
