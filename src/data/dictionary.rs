//! Definition lookups against the public dictionaryapi.dev service.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::blocking::Client;
use reqwest::redirect::{Attempt, Policy};

use crate::error::{AppError, ErrorKind};

pub const DEFAULT_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(20);

/// Environment variable that overrides [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "DICTIONARY_API_BASE";

const MAX_REDIRECTS: usize = 5;

/// First noun sense in a single-line response body. The leading `.*` is
/// greedy, so with several noun entries the last one wins.
static NOUN_DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^.*"partOfSpeech":"noun","definitions":\[\{"definition":"(.*?)".*$"#)
        .expect("noun definition pattern is valid")
});

/// Something that can map a word to a definition.
///
/// The returned text is unfiltered: callers decide whether it is usable.
pub trait DefinitionLookup {
    fn lookup(&self, word: &str) -> Result<String, AppError>;
}

/// Lookup that never has a definition. Used for `--offline` runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDefinitions;

impl DefinitionLookup for NoDefinitions {
    fn lookup(&self, _word: &str) -> Result<String, AppError> {
        Ok(String::new())
    }
}

pub struct DictionaryClient {
    client: Client,
    base_url: String,
}

impl DictionaryClient {
    pub fn new(base_url: impl Into<String>, connect_timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .http1_only()
            .redirect(Policy::custom(follow_redirect))
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| AppError::new(ErrorKind::Lookup, format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Build a client whose base URL comes from `base_override`, else
    /// `DICTIONARY_API_BASE` (`.env` is honored), else the public service.
    pub fn from_env(base_override: Option<String>, connect_timeout: Duration) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let base_url = base_override
            .or_else(|| std::env::var(BASE_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if base_url.trim().is_empty() {
            return Err(AppError::new(ErrorKind::InvalidInput, "Dictionary API base URL is empty."));
        }
        Self::new(base_url, connect_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Entry URL for `word`. The word goes into the path as-is, unencoded.
    pub fn entry_url(&self, word: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), word)
    }

    /// Fetch the raw response body for `word`.
    ///
    /// Non-success statuses are not errors: the service answers unknown words
    /// with a 404 JSON body, which extraction then rejects.
    pub fn fetch_body(&self, word: &str) -> Result<String, AppError> {
        let url = self.entry_url(word);
        tracing::debug!(%url, "dictionary request");

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| AppError::new(ErrorKind::Lookup, format!("Dictionary request for '{word}' failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(%status, word, "dictionary returned non-success status");
        }

        resp.text().map_err(|e| {
            AppError::new(
                ErrorKind::Lookup,
                format!("Failed to read dictionary response for '{word}': {e}"),
            )
        })
    }
}

impl DefinitionLookup for DictionaryClient {
    fn lookup(&self, word: &str) -> Result<String, AppError> {
        let body = self.fetch_body(word)?;
        Ok(extract_definition(&body))
    }
}

/// Pull the first noun definition out of a response body.
///
/// When the body does not have the expected shape it comes back unchanged,
/// which callers detect by its braces.
pub fn extract_definition(body: &str) -> String {
    NOUN_DEFINITION.replace(body, "$1").into_owned()
}

/// Follow redirects, but never from https down to http, and at most
/// `MAX_REDIRECTS` hops.
fn follow_redirect(attempt: Attempt<'_>) -> reqwest::redirect::Action {
    let downgrade = attempt.url().scheme() == "http"
        && attempt
            .previous()
            .last()
            .is_some_and(|prev| prev.scheme() == "https");
    if downgrade {
        attempt.stop()
    } else if attempt.previous().len() > MAX_REDIRECTS {
        attempt.error("too many redirects")
    } else {
        attempt.follow()
    }
}
