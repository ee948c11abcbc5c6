//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - loads the built-in dataset
//! - enriches it (live lookups or offline)
//! - prints the JSON array as the last stdout line

use std::io::Write;
use std::time::Duration;

use clap::Parser;

use crate::cli::Cli;
use crate::data::{DefinitionLookup, DictionaryClient, NoDefinitions, load_fruit_table};
use crate::domain::CatalogConfig;
use crate::enrich::RngRandomness;
use crate::error::{AppError, ErrorKind};

pub mod pipeline;

/// Entry point for the `fruits` binary.
pub fn run() -> Result<(), AppError> {
    crate::logging::init();
    let cli = Cli::parse();
    let config = catalog_config_from_args(&cli)?;
    run_with_config(&config)
}

pub fn run_with_config(config: &CatalogConfig) -> Result<(), AppError> {
    let table = load_fruit_table()?;
    tracing::info!(rows = table.len(), offline = config.offline, "starting catalog run");

    let lookup: Box<dyn DefinitionLookup> = if config.offline {
        Box::new(NoDefinitions)
    } else {
        let client = DictionaryClient::from_env(config.api_base.clone(), config.connect_timeout)?;
        tracing::info!(base_url = client.base_url(), "using dictionary service");
        Box::new(client)
    };
    let mut rng = RngRandomness::from_seed(config.seed);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let run = pipeline::run_catalog(&table, lookup.as_ref(), &mut rng, &mut out)?;

    writeln!(out, "{}", run.json)
        .and_then(|()| out.flush())
        .map_err(|e| AppError::new(ErrorKind::Output, format!("Failed to write catalog JSON: {e}")))?;

    Ok(())
}

pub fn catalog_config_from_args(cli: &Cli) -> Result<CatalogConfig, AppError> {
    if cli.connect_timeout == 0 {
        return Err(AppError::new(ErrorKind::InvalidInput, "--connect-timeout must be > 0."));
    }
    Ok(CatalogConfig {
        seed: cli.seed,
        offline: cli.offline,
        connect_timeout: Duration::from_secs(cli.connect_timeout),
        api_base: cli.api_base.clone(),
    })
}
