//! Command-line parsing for the fruit catalog.
//!
//! Every flag is optional; with none given the binary performs the standard
//! run: built-in dataset, live lookups, entropy-seeded randomness.

use clap::Parser;

use crate::data::dictionary::DEFAULT_CONNECT_TIMEOUT;

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "fruits",
    version,
    about = "Enrich the built-in fruit list with dictionary definitions and print it as JSON"
)]
pub struct Cli {
    /// Seed for price offsets and supplier categories (reproducible output).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip dictionary lookups; every description is empty.
    #[arg(long)]
    pub offline: bool,

    /// Connection timeout for each lookup, in seconds.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_CONNECT_TIMEOUT.as_secs())]
    pub connect_timeout: u64,

    /// Base URL of the dictionary entries endpoint.
    ///
    /// Falls back to `DICTIONARY_API_BASE`, then the public dictionaryapi.dev service.
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standard_run() {
        let cli = Cli::parse_from(["fruits"]);
        assert_eq!(cli.seed, None);
        assert!(!cli.offline);
        assert_eq!(cli.connect_timeout, 20);
        assert_eq!(cli.api_base, None);
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::parse_from([
            "fruits",
            "--seed",
            "9",
            "--offline",
            "--connect-timeout",
            "5",
            "--api-base",
            "http://localhost:8080/en",
        ]);
        assert_eq!(cli.seed, Some(9));
        assert!(cli.offline);
        assert_eq!(cli.connect_timeout, 5);
        assert_eq!(cli.api_base.as_deref(), Some("http://localhost:8080/en"));
    }
}
