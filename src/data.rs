// src/data.rs
//
// Typed shapes for the jobs feed, plus the fetch-lifecycle view state.
//
// - JobPosting / Dataset: deserialized once at the fetch boundary and
//   never mutated afterwards. Optional fields stay Option<String>;
//   display-safe values are derived lazily by core::normalize.
// - ViewState: Loading / Error / Ready, owned by the GUI app. Workers
//   write into it through an Arc<Mutex<_>> (see gui::app).

use serde::Deserialize;

use crate::core::fetch::FetchError;

/// One posting as published by the scraper. Field names match the feed
/// JSON exactly. The producer routinely emits `null` for the optional
/// fields; `job_posted_at_datetime_utc` has also been seen malformed or
/// epoch-corrupted, which downstream normalization absorbs.
#[derive(Clone, Debug, Deserialize)]
pub struct JobPosting {
    pub job_id: String,
    pub job_title: String,
    pub employer_name: String,
    #[serde(default)]
    pub employer_logo: Option<String>,
    #[serde(default)]
    pub job_city: Option<String>,
    #[serde(default)]
    pub job_state: Option<String>,
    #[serde(default)]
    pub job_country: Option<String>,
    pub job_apply_link: String,
    #[serde(default)]
    pub job_posted_at_datetime_utc: Option<String>,
}

/// The whole feed. Order as received is preserved; no dedup, no re-sort.
/// Duplicate job_id values are tolerated (the GUI keys widgets by list
/// index, not by id).
#[derive(Clone, Debug, Deserialize)]
pub struct Dataset {
    pub last_updated: String,
    pub jobs: Vec<JobPosting>,
}

/// Fetch lifecycle. Loading → Ready on a good fetch+parse, Loading →
/// Error otherwise. Ready is terminal for the lifecycle; the search
/// term lives in GuiState and mutates freely without a new fetch.
#[derive(Clone, Debug)]
pub enum ViewState {
    Loading,
    Error(String),
    Ready(Dataset),
}

impl ViewState {
    pub fn from_fetch(res: Result<Dataset, FetchError>) -> Self {
        match res {
            Ok(ds) => ViewState::Ready(ds),
            Err(e) => ViewState::Error(e.to_string()),
        }
    }
}
