//! Ranker — orders match results by composite score and keeps the top N.

use std::cmp::Ordering;

use crate::models::{MatchResult, RankedResume};

/// Stable sort by composite score, highest first; ties keep upload order.
/// `top_n` beyond the number of results simply returns them all.
pub fn rank(mut results: Vec<MatchResult>, top_n: usize) -> Vec<RankedResume> {
    // Vec::sort_by is stable
    results.sort_by(|a, b| {
        b.composite_score
            .partial_cmp(&a.composite_score)
            .unwrap_or(Ordering::Equal)
    });

    results
        .into_iter()
        .take(top_n)
        .enumerate()
        .map(|(index, result)| to_ranked(index + 1, result))
        .collect()
}

fn to_ranked(rank: usize, result: MatchResult) -> RankedResume {
    RankedResume {
        rank,
        resume_name: result.resume_name,
        skill_match_pct: as_percent(result.skill_match),
        experience_match_pct: as_percent(result.experience_match),
        ats_score_pct: result.ats_score,
        composite_score: result.composite_score,
        similarity: result.similarity,
        feedback: result.feedback,
    }
}

/// Halves round to even, so 12.5% reports as 12.
fn as_percent(ratio: f64) -> u32 {
    (ratio.clamp(0.0, 1.0) * 100.0).round_ties_even() as u32
}
