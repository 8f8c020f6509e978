// src/core/filter.rs
//
// Free-text search over the visible list. Exact substring semantics,
// case-folded; no tokenization, no ranking.

use crate::data::JobPosting;

/// Keep jobs whose title OR employer name contains the search term,
/// case-insensitively. An empty term keeps everything. Input order is
/// preserved; records are borrowed, not cloned.
pub fn filter<'a>(jobs: &'a [JobPosting], search_term: &str) -> Vec<&'a JobPosting> {
    if search_term.is_empty() {
        return jobs.iter().collect();
    }
    let needle = search_term.to_lowercase();
    jobs.iter()
        .filter(|job| {
            job.job_title.to_lowercase().contains(&needle)
                || job.employer_name.to_lowercase().contains(&needle)
        })
        .collect()
}
