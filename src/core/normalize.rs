// src/core/normalize.rs
//
// Per-record field normalization. The feed is untrusted at the field
// level: locations come with any subset of parts missing, logos may be
// absent or dead links, and posting dates have shipped malformed or
// epoch-corrupted more than once. Everything here degrades to a safe
// display value; nothing errors.
//
// Pure functions, called lazily at render/filter time. Record counts
// are small, so no caching.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, Utc};

use crate::config::consts::{FRESHNESS_FALLBACK, FRESHNESS_TODAY, LOCATION_FALLBACK};
use crate::data::JobPosting;

/// How a card should render its logo box. Image is a best guess: the
/// URL may still turn out dead, and the GUI falls back to the initial
/// once the download or decode fails (see gui::logos).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogoDisplay {
    Image(String),
    Initial(char),
}

/// "City, State, Country" with absent/empty parts skipped; the
/// remote fallback when nothing is left.
pub fn location(job: &JobPosting) -> String {
    let parts: Vec<&str> = [
        job.job_city.as_deref(),
        job.job_state.as_deref(),
        job.job_country.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|p| !p.is_empty())
    .collect();

    if parts.is_empty() {
        s!(LOCATION_FALLBACK)
    } else {
        parts.join(", ")
    }
}

/// User-facing freshness label for a posting timestamp.
///
/// Missing, unparseable, or implausibly old timestamps all read as
/// "Recently" — the producer has emitted epoch artifacts before, and a
/// nonsensical absolute date must never reach the user. Day difference
/// is a ceiling, so any partial present/future day counts as "Today".
pub fn freshness(
    posted_at_utc: Option<&str>,
    now: DateTime<Utc>,
    min_plausible_year: i32,
) -> String {
    let Some(raw) = posted_at_utc.map(str::trim).filter(|r| !r.is_empty()) else {
        return s!(FRESHNESS_FALLBACK);
    };
    let Some(posted) = parse_utc(raw) else {
        return s!(FRESHNESS_FALLBACK);
    };
    if posted.year() < min_plausible_year {
        return s!(FRESHNESS_FALLBACK);
    }

    let days = days_ceil(posted - now);
    if days >= 0 {
        return s!(FRESHNESS_TODAY);
    }
    match -days {
        1 => s!("Yesterday"),
        n => format!("{n} days ago"),
    }
}

/// Image when a logo URL is present, the employer initial otherwise.
pub fn resolve_logo(job: &JobPosting) -> LogoDisplay {
    match job.employer_logo.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => LogoDisplay::Image(s!(url)),
        _ => LogoDisplay::Initial(initial(&job.employer_name)),
    }
}

/// First character of the employer name, '?' if there isn't one.
pub fn initial(employer_name: &str) -> char {
    employer_name.trim().chars().next().unwrap_or('?')
}

// The feed nominally writes RFC 3339, but the scraper's own
// last_updated has no offset, and upstream has produced both.
fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

// Whole days, rounded toward positive infinity.
fn days_ceil(diff: TimeDelta) -> i64 {
    let secs = diff.num_seconds();
    secs.div_euclid(86_400) + i64::from(secs.rem_euclid(86_400) > 0)
}
