//! Experience heuristics — years of experience claimed by a resume, and the
//! years a job description asks for.
//!
//! Both work on lowercased raw text: numbers, dashes and month names would not
//! survive normalization.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::ExperienceRequirement;

/// Earliest start year a date range may have before it is treated as noise.
const EARLIEST_PLAUSIBLE_YEAR: i32 = 1950;

/// Synthetic upper bound added to a single stated minimum ("5+ years" → 5–7).
const OPEN_ENDED_SPAN_YEARS: u32 = 2;

/// `5 years`, `5+ yrs`, `10 year`
static SINGLE_YEARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*\+?\s*(?:years?|yrs?)").expect("single years pattern should compile")
});

/// `3-5 years`, `3 – 5 yrs`, `3 to 5 years`
static RANGE_YEARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*\+?\s*(?:-|–|to)\s*(\d+)\s*(?:years?|yrs?)")
        .expect("range years pattern should compile")
});

/// `jan 2019 - present`, `2015 – march 2018`, `2016 to 2020`
static DATE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:(?:jan|feb|mar|apr|may|jun|jul|aug|sep|sept|oct|nov|dec)[a-z]*\.?\s+)?\b(\d{4})\s*(?:-|–|to)\s*(?:(?:jan|feb|mar|apr|may|jun|jul|aug|sep|sept|oct|nov|dec)[a-z]*\.?\s+)?(\d{4}|present)\b",
    )
    .expect("date range pattern should compile")
});

/// Estimates years of experience as the maximum of three signals:
/// the largest `N years` mention, the largest upper bound of an `A-B years`
/// range, and the number of distinct calendar years covered by date ranges.
/// Taking the maximum keeps one tenure phrased several ways from being
/// counted more than once.
pub fn estimate_experience_years_at(text: &str, current_year: i32) -> u32 {
    let stated = SINGLE_YEARS
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .max()
        .unwrap_or(0);

    let ranged = RANGE_YEARS
        .captures_iter(text)
        .filter_map(|caps| caps[2].parse::<u32>().ok())
        .max()
        .unwrap_or(0);

    let dated = employment_years(text, current_year).len() as u32;

    stated.max(ranged).max(dated)
}

/// Collects every calendar year in `[start, end)` across all plausible date
/// ranges. Overlapping ranges share years; differently phrased copies of the
/// same tenure are not merged beyond that.
fn employment_years(text: &str, current_year: i32) -> BTreeSet<i32> {
    let mut years = BTreeSet::new();

    for caps in DATE_RANGE.captures_iter(text) {
        let Ok(start) = caps[1].parse::<i32>() else {
            continue;
        };
        let end = match &caps[2] {
            "present" => current_year,
            year => match year.parse::<i32>() {
                Ok(y) => y,
                Err(_) => continue,
            },
        };

        if EARLIEST_PLAUSIBLE_YEAR <= start && start <= end && end <= current_year + 1 {
            years.extend(start..end);
        }
    }

    years
}

/// Extracts the experience requirement from lowercased job description text.
///
/// - first `A-B years` range → `(A, B)`
/// - else first `A+ years` → `(A, A + 2)`
/// - else `(0, 0)`, meaning no requirement was stated
pub fn extract_experience_requirement(text: &str) -> ExperienceRequirement {
    if let Some(caps) = RANGE_YEARS.captures(text) {
        if let (Ok(min), Ok(max)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>()) {
            return ExperienceRequirement::new(min, max);
        }
    }

    if let Some(caps) = SINGLE_YEARS.captures(text) {
        if let Ok(min) = caps[1].parse::<u32>() {
            return ExperienceRequirement::new(min, min.saturating_add(OPEN_ENDED_SPAN_YEARS));
        }
    }

    ExperienceRequirement::default()
}
