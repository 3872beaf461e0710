use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::builder::{export_file_name, render_docx, ResumeForm};
use crate::errors::AppError;

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// POST /api/v1/builder/export
///
/// Renders the submitted form and returns it as a `.docx` attachment.
pub async fn handle_export(Json(form): Json<ResumeForm>) -> Result<Response, AppError> {
    if form.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let file_name = export_file_name(&form.name);
    let bytes = render_docx(&form)?;
    info!(file = %file_name, size = bytes.len(), "Exported resume document");

    Ok((
        [
            (header::CONTENT_TYPE, DOCX_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}
