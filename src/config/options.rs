// src/config/options.rs
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    /// Where the scraper publishes the jobs feed.
    pub data_url: String,
    /// Cutoff year for the date-corruption guard (see consts).
    pub min_plausible_year: i32,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            data_url: s!(DATA_URL),
            min_plausible_year: MIN_PLAUSIBLE_YEAR,
        }
    }
}
