//! Scorer — skill and experience match ratios, the weighted composite, and feedback.

use crate::models::{ExperienceRequirement, Feedback, FeedbackSeverity, JobDescription, MatchResult, Resume};

/// Experience fit assumed when the job states no requirement.
const NEUTRAL_EXPERIENCE_MATCH: f64 = 0.7;
/// Experience fit when the resume meets a minimum that has no wider range.
const MEETS_MINIMUM_MATCH: f64 = 0.9;
/// Share of the experience score available below the stated minimum.
const BELOW_MINIMUM_CEILING: f64 = 0.3;

#[derive(Debug, Clone)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub ats: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.5,
            experience: 0.3,
            ats: 0.2,
        }
    }
}

/// |required ∩ detected| / |required|; 0.0 when the job requires nothing.
pub fn skill_match(required: &[String], detected: &[String]) -> f64 {
    if required.is_empty() {
        return 0.0;
    }
    let matched = required.iter().filter(|s| detected.contains(s)).count();
    matched as f64 / required.len() as f64
}

/// Experience fit as an ordered decision table; the first matching row wins.
///
/// | condition                       | score                                  |
/// |---------------------------------|----------------------------------------|
/// | no requirement (0, 0)           | 0.7                                    |
/// | exp ≥ max                       | 1.0                                    |
/// | exp ≥ min, max > min            | 0.7 + 0.3 × (exp − min) / (max − min)  |
/// | exp ≥ min                       | 0.9                                    |
/// | exp > 0                         | 0.3 × exp / min                        |
/// | otherwise                       | 0.0                                    |
pub fn experience_match(resume_years: u32, requirement: ExperienceRequirement) -> f64 {
    let ExperienceRequirement {
        min_years: min,
        max_years: max,
    } = requirement;
    let exp = resume_years;

    if requirement.is_unspecified() {
        NEUTRAL_EXPERIENCE_MATCH
    } else if exp >= max {
        1.0
    } else if exp >= min {
        if max > min {
            NEUTRAL_EXPERIENCE_MATCH
                + (1.0 - NEUTRAL_EXPERIENCE_MATCH) * (exp - min) as f64 / (max - min) as f64
        } else {
            MEETS_MINIMUM_MATCH
        }
    } else if exp > 0 {
        // exp < min here, so min > 0
        BELOW_MINIMUM_CEILING * (exp as f64 / min as f64)
    } else {
        0.0
    }
}

/// Weighted composite as a percentage rounded to two decimals.
pub fn composite_score(
    skill_match: f64,
    experience_match: f64,
    ats_score: u8,
    weights: &ScoringWeights,
) -> f64 {
    let combined = weights.skills * skill_match
        + weights.experience * experience_match
        + weights.ats * (f64::from(ats_score) / 100.0);
    round_to_hundredths(combined * 100.0)
}

/// Halves round to even.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Builds feedback from the scoring inputs alone, independent of the composite.
pub fn build_feedback(
    required: &[String],
    detected: &[String],
    requirement: ExperienceRequirement,
    resume_years: u32,
    ats_issues: &[String],
) -> Vec<Feedback> {
    let mut feedback = Vec::new();

    let missing: Vec<&str> = required
        .iter()
        .filter(|s| !detected.contains(s))
        .map(String::as_str)
        .collect();
    if !missing.is_empty() {
        feedback.push(Feedback::new(
            FeedbackSeverity::Warning,
            format!(
                "Missing key skills: {}. Consider adding them.",
                missing.join(", ")
            ),
        ));
    }

    let ExperienceRequirement {
        min_years: min,
        max_years: max,
    } = requirement;
    if resume_years < min {
        feedback.push(Feedback::new(
            FeedbackSeverity::Warning,
            format!("This job prefers {min}+ years. Your resume shows only {resume_years} year(s)."),
        ));
    } else if max > min && resume_years < max {
        feedback.push(Feedback::new(
            FeedbackSeverity::Info,
            format!("Ideal experience range is {min}-{max} years. You have {resume_years} years."),
        ));
    }

    if ats_issues.is_empty() {
        feedback.push(Feedback::new(
            FeedbackSeverity::Success,
            "ATS formatting looks good!",
        ));
    } else {
        feedback.extend(
            ats_issues
                .iter()
                .map(|issue| Feedback::new(FeedbackSeverity::Error, issue.clone())),
        );
    }

    feedback
}

/// Scores one resume against one job description.
pub fn score_match(
    job: &JobDescription,
    resume: &Resume,
    similarity: f64,
    weights: &ScoringWeights,
) -> MatchResult {
    let skill = skill_match(&job.required_skills, &resume.skills);
    let experience = experience_match(resume.experience_years, job.experience);
    let composite = composite_score(skill, experience, resume.ats.score, weights);

    MatchResult {
        resume_name: resume.name().to_string(),
        skill_match: skill,
        experience_match: experience,
        ats_score: resume.ats.score,
        similarity,
        composite_score: composite,
        feedback: build_feedback(
            &job.required_skills,
            &resume.skills,
            job.experience,
            resume.experience_years,
            &resume.ats.issues,
        ),
    }
}
