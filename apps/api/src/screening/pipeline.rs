//! Screening pipeline — composes extraction output, normalization, feature
//! extraction, similarity, scoring and ranking.
//!
//! Every input arrives as a parameter and every result is returned; the
//! pipeline holds no state of its own.

use chrono::{Datelike, Utc};
use tracing::debug;

use crate::models::{Document, JobDescription, Resume, ScreeningReport};
use crate::screening::ats::check_ats_format;
use crate::screening::experience::{estimate_experience_years_at, extract_experience_requirement};
use crate::screening::normalizer::normalize;
use crate::screening::ranker::rank;
use crate::screening::scoring::{score_match, ScoringWeights};
use crate::screening::similarity::similarity_scores;
use crate::screening::skills::SkillVocabulary;

fn build_document(name: &str, raw_text: String) -> Document {
    Document {
        name: name.to_string(),
        normalized_text: normalize(&raw_text),
        raw_text,
    }
}

/// Builds a job description: required skills from the normalized text,
/// experience requirement from the lowercased raw text.
pub fn analyze_job(name: &str, raw_text: String, vocabulary: &SkillVocabulary) -> JobDescription {
    let document = build_document(name, raw_text);
    let required_skills = vocabulary.detect(&document.normalized_text);
    let experience = extract_experience_requirement(&document.raw_text.to_lowercase());

    debug!(
        job = name,
        skills = ?required_skills,
        min_years = experience.min_years,
        max_years = experience.max_years,
        "Analyzed job description"
    );

    JobDescription {
        document,
        required_skills,
        experience,
    }
}

/// Builds a resume using the current calendar year for open-ended date ranges.
pub fn analyze_resume(name: &str, raw_text: String, vocabulary: &SkillVocabulary) -> Resume {
    analyze_resume_at(name, raw_text, vocabulary, Utc::now().year())
}

/// Builds a resume: skills from the normalized text, experience from the
/// lowercased raw text, ATS report from the raw text.
pub fn analyze_resume_at(
    name: &str,
    raw_text: String,
    vocabulary: &SkillVocabulary,
    current_year: i32,
) -> Resume {
    let document = build_document(name, raw_text);
    let skills = vocabulary.detect(&document.normalized_text);
    let experience_years =
        estimate_experience_years_at(&document.raw_text.to_lowercase(), current_year);
    let ats = check_ats_format(&document.raw_text);

    debug!(
        resume = name,
        skills = ?skills,
        experience_years,
        ats_score = ats.score,
        "Analyzed resume"
    );

    Resume {
        document,
        skills,
        experience_years,
        ats,
    }
}

/// Scores every resume against `job` and returns the top `top_n`, best first.
pub fn screen(
    job: &JobDescription,
    resumes: &[Resume],
    top_n: usize,
    weights: &ScoringWeights,
) -> ScreeningReport {
    let similarities = similarity_scores(
        &job.document.normalized_text,
        resumes.iter().map(|r| r.document.normalized_text.as_str()),
    );

    let results = resumes
        .iter()
        .zip(similarities)
        .map(|(resume, similarity)| score_match(job, resume, similarity, weights))
        .collect();

    ScreeningReport {
        job_name: job.name().to_string(),
        required_skills: job.required_skills.clone(),
        experience_requirement: job.experience,
        resumes_considered: resumes.len(),
        results: rank(results, top_n),
    }
}
