use serde::{Deserialize, Serialize};

use crate::models::document::ExperienceRequirement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackSeverity {
    Warning,
    Info,
    Error,
    Success,
}

/// One human-readable suggestion shown under a ranked resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub severity: FeedbackSeverity,
    pub message: String,
}

impl Feedback {
    pub fn new(severity: FeedbackSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

/// Score of one resume against one job description. Computed on demand, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub resume_name: String,
    pub skill_match: f64,      // 0.0 – 1.0
    pub experience_match: f64, // 0.0 – 1.0
    pub ats_score: u8,         // 0 – 100
    pub similarity: f64,       // 0.0 – 1.0
    pub composite_score: f64,  // 0.0 – 100.0, two decimals
    pub feedback: Vec<Feedback>,
}

/// Presentation row for a ranked resume. Percentages are rounded to whole numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResume {
    pub rank: usize,
    pub resume_name: String,
    pub skill_match_pct: u32,
    pub experience_match_pct: u32,
    pub ats_score_pct: u8,
    pub composite_score: f64,
    pub similarity: f64,
    pub feedback: Vec<Feedback>,
}

/// Full screening output for one job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub job_name: String,
    pub required_skills: Vec<String>,
    pub experience_requirement: ExperienceRequirement,
    pub resumes_considered: usize,
    pub results: Vec<RankedResume>,
}
