// src/config/consts.rs

// Feed
pub const DATA_URL: &str = "https://hr-insight-jobs.pages.dev/jobs.json";

/// Postings dated before this year are treated as producer-side date
/// corruption (epoch artifacts) and shown as "Recently". Has been bumped
/// before (2020 → 2024); keep it a single named constant.
pub const MIN_PLAUSIBLE_YEAR: i32 = 2024;

// Display fallbacks
pub const LOCATION_FALLBACK: &str = "Remote / USA";
pub const FRESHNESS_FALLBACK: &str = "Recently";
pub const FRESHNESS_TODAY: &str = "Today";

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 700.0;
