//! Resume builder — renders a `.docx` resume from structured form fields.

pub mod handlers;

use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, PageMargin, Paragraph, Run};
use serde::Deserialize;
use thiserror::Error;

/// 0.75 inch in twentieths of a point.
const MARGIN_TWIPS: i32 = 1080;
/// Font sizes are in half-points.
const NAME_SIZE: usize = 44;
const HEADING_SIZE: usize = 28;
const HEADING_ACCENT: &str = "0066CC";
const BLACK: &str = "000000";

#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("could not write document: {0}")]
    Pack(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum TemplateStyle {
    #[default]
    Modern,
    Elegant,
    Compact,
}

impl TemplateStyle {
    pub fn name_color(self) -> &'static str {
        match self {
            TemplateStyle::Modern => "0099FF",
            TemplateStyle::Elegant => BLACK,
            TemplateStyle::Compact => "505050",
        }
    }

    pub fn heading_color(self) -> &'static str {
        match self {
            TemplateStyle::Modern => HEADING_ACCENT,
            TemplateStyle::Elegant | TemplateStyle::Compact => BLACK,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResumeForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
    pub summary: String,
    /// Comma-separated.
    pub skills: String,
    pub experience: String,
    pub education: String,
    pub projects: Option<String>,
    pub template: TemplateStyle,
}

impl ResumeForm {
    pub fn contact_line(&self) -> String {
        let mut parts = vec![self.email.trim().to_string(), self.phone.trim().to_string()];
        if let Some(url) = non_blank(&self.linkedin) {
            parts.push(format!("LinkedIn: {url}"));
        }
        if let Some(url) = non_blank(&self.portfolio) {
            parts.push(format!("Portfolio: {url}"));
        }
        parts.join(" | ")
    }

    pub fn skill_list(&self) -> Vec<&str> {
        self.skills
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// `Jane Doe` → `Jane_Doe_Resume.docx`
pub fn export_file_name(name: &str) -> String {
    format!("{}_Resume.docx", name.trim().replace(' ', "_"))
}

fn heading(text: &str, style: TemplateStyle) -> Paragraph {
    Paragraph::new().add_run(
        Run::new()
            .add_text(text)
            .size(HEADING_SIZE)
            .bold()
            .color(style.heading_color()),
    )
}

fn body(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text.trim()))
}

fn section(docx: Docx, title: &str, paragraphs: Vec<Paragraph>, style: TemplateStyle) -> Docx {
    let docx = docx
        .add_paragraph(Paragraph::new())
        .add_paragraph(heading(title, style));
    paragraphs.into_iter().fold(docx, Docx::add_paragraph)
}

/// Builds the resume document and packs it into `.docx` bytes.
pub fn render_docx(form: &ResumeForm) -> Result<Vec<u8>, BuilderError> {
    let style = form.template;

    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(MARGIN_TWIPS)
                .bottom(MARGIN_TWIPS)
                .left(MARGIN_TWIPS)
                .right(MARGIN_TWIPS),
        )
        .add_paragraph(
            Paragraph::new()
                .add_run(
                    Run::new()
                        .add_text(form.name.trim())
                        .size(NAME_SIZE)
                        .bold()
                        .color(style.name_color()),
                )
                .align(AlignmentType::Center),
        )
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(form.contact_line()))
                .align(AlignmentType::Center),
        );

    docx = section(docx, "Professional Summary", vec![body(&form.summary)], style);

    let bullets = form
        .skill_list()
        .into_iter()
        .map(|skill| body(&format!("• {skill}")))
        .collect();
    docx = section(docx, "Key Skills", bullets, style);

    docx = section(docx, "Work Experience", vec![body(&form.experience)], style);
    docx = section(docx, "Education", vec![body(&form.education)], style);

    if let Some(projects) = non_blank(&form.projects) {
        docx = section(docx, "Projects", vec![body(projects)], style);
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| BuilderError::Pack(e.to_string()))?;

    Ok(buffer.into_inner())
}
