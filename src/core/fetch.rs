// src/core/fetch.rs
//
// One-shot download of the jobs feed. Whole-dataset failures are the
// only errors that reach the user; per-field defects are left for the
// normalizer. No retry here: reloading the app is the retry mechanism.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::data::Dataset;

#[derive(Debug)]
pub enum FetchError {
    /// Resource absent or non-success status: the scraper hasn't
    /// published yet.
    NotFound,
    /// Body present but not the expected JSON shape.
    Corrupt,
    /// Transport-level failure.
    Network(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotFound => {
                write!(f, "Waiting for data... (the scraper has not run yet)")
            }
            FetchError::Corrupt => write!(f, "The jobs feed is empty or corrupted"),
            FetchError::Network(cause) => {
                write!(f, "Could not reach the jobs feed: {cause}")
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// GET the feed and parse it as a Dataset.
///
/// The feed changes between scraper runs with no version identifier,
/// so every request carries a cache-busting query parameter.
pub fn fetch(url: &str) -> Result<Dataset, FetchError> {
    let busted = cache_bust(url, now_millis());

    let resp = reqwest::blocking::get(&busted)
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !resp.status().is_success() {
        return Err(FetchError::NotFound);
    }

    let body = resp
        .text()
        .map_err(|e| FetchError::Network(e.to_string()))?;

    serde_json::from_str(&body).map_err(|_| FetchError::Corrupt)
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

fn cache_bust(url: &str, millis: u128) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}t={millis}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_bust_appends_query() {
        assert_eq!(
            cache_bust("https://x.test/jobs.json", 42),
            "https://x.test/jobs.json?t=42"
        );
    }

    #[test]
    fn cache_bust_extends_existing_query() {
        assert_eq!(
            cache_bust("https://x.test/jobs.json?v=1", 42),
            "https://x.test/jobs.json?v=1&t=42"
        );
    }

    #[test]
    fn error_messages_are_distinct() {
        let msgs = [
            FetchError::NotFound.to_string(),
            FetchError::Corrupt.to_string(),
            FetchError::Network(s!("refused")).to_string(),
        ];
        assert!(msgs[0].contains("Waiting for data"));
        assert!(msgs[1].contains("corrupted"));
        assert!(msgs[2].contains("refused"));
        assert_ne!(msgs[0], msgs[1]);
        assert_ne!(msgs[1], msgs[2]);
    }
}
