//! Axum route handlers for the Screening API.

use anyhow::Context;
use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::{AppError, UPLOAD_FIRST_GUIDANCE};
use crate::extraction::{extract_text, ContentType};
use crate::models::{ExperienceRequirement, JobDescription, Resume, ScreeningReport};
use crate::screening::pipeline::{analyze_job, analyze_resume, screen};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct JobSummary {
    pub name: String,
    pub required_skills: Vec<String>,
    pub experience_requirement: ExperienceRequirement,
}

#[derive(Debug, Serialize)]
pub struct ResumeSummary {
    pub name: String,
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub ats_score: u8,
    pub ats_issues: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RejectedFile {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse<T> {
    pub accepted: Vec<T>,
    pub rejected: Vec<RejectedFile>,
}

#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    /// Job description name; the first uploaded one when omitted.
    pub job: Option<String>,
    pub top_n: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct TextDocument {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ScreenRequest {
    pub job: TextDocument,
    pub resumes: Vec<TextDocument>,
    pub top_n: Option<usize>,
}

impl From<&JobDescription> for JobSummary {
    fn from(job: &JobDescription) -> Self {
        Self {
            name: job.name().to_string(),
            required_skills: job.required_skills.clone(),
            experience_requirement: job.experience,
        }
    }
}

impl From<&Resume> for ResumeSummary {
    fn from(resume: &Resume) -> Self {
        Self {
            name: resume.name().to_string(),
            skills: resume.skills.clone(),
            experience_years: resume.experience_years,
            ats_score: resume.ats.score,
            ats_issues: resume.ats.issues.clone(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Upload plumbing
// ────────────────────────────────────────────────────────────────────────────

/// One file part of a multipart upload, before extraction.
struct UploadedFile {
    name: String,
    declared_type: Option<String>,
    bytes: Bytes,
}

async fn read_uploads(mut multipart: Multipart) -> Result<Vec<UploadedFile>, AppError> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart upload: {e}")))?
    {
        let name = field
            .file_name()
            .or_else(|| field.name())
            .unwrap_or("upload")
            .to_string();
        let declared_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload '{name}': {e}")))?;

        files.push(UploadedFile {
            name,
            declared_type,
            bytes,
        });
    }

    if files.is_empty() {
        return Err(AppError::Validation("No files were uploaded".to_string()));
    }
    Ok(files)
}

/// Extracts and analyzes each file. A file that cannot be read is rejected on
/// its own; the rest of the batch still goes through.
fn process_batch<T>(
    files: Vec<UploadedFile>,
    analyze: impl Fn(&str, String) -> T,
) -> (Vec<T>, Vec<RejectedFile>) {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for file in files {
        let text = ContentType::from_declared(file.declared_type.as_deref(), &file.name)
            .and_then(|content_type| extract_text(&file.bytes, content_type));

        match text {
            Ok(text) => accepted.push(analyze(&file.name, text)),
            Err(e) => {
                warn!(file = %file.name, error = %e, "Rejected upload");
                rejected.push(RejectedFile {
                    name: file.name,
                    reason: e.to_string(),
                });
            }
        }
    }

    (accepted, rejected)
}

fn nothing_accepted(rejected: &[RejectedFile]) -> AppError {
    let details: Vec<String> = rejected
        .iter()
        .map(|r| format!("{} ({})", r.name, r.reason))
        .collect();
    AppError::UnprocessableEntity(format!(
        "None of the uploaded files could be read: {}",
        details.join("; ")
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jobs
///
/// Replaces the stored job descriptions with the readable files of this batch.
pub async fn handle_upload_jobs(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse<JobSummary>>, AppError> {
    let files = read_uploads(multipart).await?;
    let vocabulary = state.vocabulary.clone();

    // PDF parsing is CPU-bound
    let (jobs, rejected) = tokio::task::spawn_blocking(move || {
        process_batch(files, |name, text| analyze_job(name, text, &vocabulary))
    })
    .await
    .context("job description processing task failed")?;

    if jobs.is_empty() {
        return Err(nothing_accepted(&rejected));
    }

    let accepted: Vec<JobSummary> = jobs.iter().map(JobSummary::from).collect();
    state.session.write().await.replace_job_descriptions(jobs);
    info!(
        accepted = accepted.len(),
        rejected = rejected.len(),
        "Job descriptions uploaded"
    );

    Ok(Json(UploadResponse { accepted, rejected }))
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<JobSummary>> {
    let session = state.session.read().await;
    Json(session.job_descriptions.iter().map(JobSummary::from).collect())
}

/// POST /api/v1/resumes
///
/// Replaces the stored resumes with the readable files of this batch.
pub async fn handle_upload_resumes(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse<ResumeSummary>>, AppError> {
    let files = read_uploads(multipart).await?;
    let vocabulary = state.vocabulary.clone();

    let (resumes, rejected) = tokio::task::spawn_blocking(move || {
        process_batch(files, |name, text| analyze_resume(name, text, &vocabulary))
    })
    .await
    .context("resume processing task failed")?;

    if resumes.is_empty() {
        return Err(nothing_accepted(&rejected));
    }

    let accepted: Vec<ResumeSummary> = resumes.iter().map(ResumeSummary::from).collect();
    state.session.write().await.replace_resumes(resumes);
    info!(
        accepted = accepted.len(),
        rejected = rejected.len(),
        "Resumes uploaded"
    );

    Ok(Json(UploadResponse { accepted, rejected }))
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(State(state): State<AppState>) -> Json<Vec<ResumeSummary>> {
    let session = state.session.read().await;
    Json(session.resumes.iter().map(ResumeSummary::from).collect())
}

/// GET /api/v1/matches?job=<name>&top_n=<n>
///
/// Ranks the stored resumes against one stored job description.
pub async fn handle_get_matches(
    State(state): State<AppState>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<ScreeningReport>, AppError> {
    let session = state.session.read().await;

    if session.job_descriptions.is_empty() || session.resumes.is_empty() {
        return Err(AppError::MissingPrerequisite(
            UPLOAD_FIRST_GUIDANCE.to_string(),
        ));
    }

    let job = session.find_job(query.job.as_deref()).ok_or_else(|| {
        AppError::NotFound(format!(
            "Job description '{}' not found",
            query.job.as_deref().unwrap_or_default()
        ))
    })?;

    let top_n = query.top_n.unwrap_or(state.config.top_n);
    let report = screen(job, &session.resumes, top_n, &state.weights);
    info!(
        job = %report.job_name,
        resumes = report.resumes_considered,
        returned = report.results.len(),
        "Screened resumes"
    );

    Ok(Json(report))
}

/// POST /api/v1/screen
///
/// Stateless screening of raw texts; nothing is stored.
pub async fn handle_screen(
    State(state): State<AppState>,
    Json(request): Json<ScreenRequest>,
) -> Result<Json<ScreeningReport>, AppError> {
    if request.job.text.trim().is_empty() {
        return Err(AppError::Validation("job.text cannot be empty".to_string()));
    }
    if request.resumes.is_empty() {
        return Err(AppError::Validation("resumes cannot be empty".to_string()));
    }

    let vocabulary = state.vocabulary.as_ref();
    let job = analyze_job(&request.job.name, request.job.text, vocabulary);
    let resumes: Vec<Resume> = request
        .resumes
        .into_iter()
        .map(|doc| analyze_resume(&doc.name, doc.text, vocabulary))
        .collect();

    let top_n = request.top_n.unwrap_or(state.config.top_n);
    Ok(Json(screen(&job, &resumes, top_n, &state.weights)))
}
