//! ATS format checker — structural heuristics that approximate what applicant
//! tracking systems fail to parse.
//!
//! Starts from 100 and subtracts a fixed penalty per failed check. Issues are
//! reported in check order.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::AtsReport;

const TABLE_PENALTY: u32 = 30;
const MISSING_SECTION_PENALTY: u32 = 20;
const MISSING_CONTACT_PENALTY: u32 = 15;
const NUMERIC_DATE_PENALTY: u32 = 10;

const REQUIRED_SECTIONS: &[&str] = &["experience", "education", "skills"];
const CONTACT_MARKERS: &[&str] = &["phone", "contact", "email", "e-mail", "mobile"];

/// A line that starts with a pipe, i.e. a table row or column layout.
static TABLE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\|").expect("table line pattern should compile"));

static NUMERIC_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{1,2}/\d{1,2}/\d{2,4}").expect("numeric date pattern should compile")
});

/// Checks raw resume text for ATS-hostile formatting.
pub fn check_ats_format(text: &str) -> AtsReport {
    let lower = text.to_lowercase();
    let mut issues = Vec::new();
    let mut penalty = 0u32;

    if TABLE_LINE.is_match(text) {
        issues.push("Avoid using tables or columns in the resume.".to_string());
        penalty += TABLE_PENALTY;
    }

    let missing_sections: Vec<&str> = REQUIRED_SECTIONS
        .iter()
        .copied()
        .filter(|section| !lower.contains(section))
        .collect();
    if !missing_sections.is_empty() {
        issues.push(format!(
            "Missing common resume headings: {}",
            missing_sections.join(", ")
        ));
        penalty += MISSING_SECTION_PENALTY * missing_sections.len() as u32;
    }

    if !CONTACT_MARKERS.iter().any(|marker| lower.contains(marker)) {
        issues.push("Missing contact information".to_string());
        penalty += MISSING_CONTACT_PENALTY;
    }

    if NUMERIC_DATE.is_match(text) {
        issues.push(
            "Use full month names instead of numeric dates (e.g., 'January 2020' instead of '1/2020')"
                .to_string(),
        );
        penalty += NUMERIC_DATE_PENALTY;
    }

    AtsReport {
        issues,
        score: 100u32.saturating_sub(penalty) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN_RESUME: &str = "Jane Doe\nEmail: jane@example.com | Phone: 555-0100\n\
        Experience\nData Analyst, Acme (January 2020 - Present)\n\
        Education\nBSc Statistics\nSkills\nPython, SQL";

    #[test]
    fn test_clean_resume_scores_100() {
        let report = check_ats_format(CLEAN_RESUME);
        assert_eq!(report.score, 100);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_inline_pipes_are_not_tables() {
        // CLEAN_RESUME separates contact details with a pipe mid-line.
        assert!(!TABLE_LINE.is_match(CLEAN_RESUME));
    }

    #[test]
    fn test_table_and_missing_skills_heading_scores_50() {
        let text = "John Smith\nemail: john@example.com\n| Name | Role | Date |\n\
            Experience\nEngineer at Initech\nEducation\nBSc";
        let report = check_ats_format(text);
        assert_eq!(report.score, 50);
        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.issues[0], "Avoid using tables or columns in the resume.");
        assert_eq!(report.issues[1], "Missing common resume headings: skills");
    }

    #[test]
    fn test_table_on_first_line_detected() {
        let text = "| Experience | Education | Skills |\ncontact me";
        let report = check_ats_format(text);
        assert_eq!(report.score, 70);
    }

    #[test]
    fn test_missing_sections_combined_into_one_issue() {
        let text = "phone 555-0100\nexperience only";
        let report = check_ats_format(text);
        assert_eq!(report.issues, vec!["Missing common resume headings: education, skills"]);
        assert_eq!(report.score, 60);
    }

    #[test]
    fn test_missing_contact() {
        let text = "Experience\nEducation\nSkills";
        let report = check_ats_format(text);
        assert_eq!(report.issues, vec!["Missing contact information"]);
        assert_eq!(report.score, 85);
    }

    #[test]
    fn test_numeric_dates_penalized() {
        let text = "Experience 01/15/2020 - 3/1/22\nEducation\nSkills\nE-mail: a@b.c";
        let report = check_ats_format(text);
        assert_eq!(report.score, 90);
        assert!(report.issues[0].contains("full month names"));
    }

    #[test]
    fn test_score_floors_at_zero() {
        // -30 table, -60 all headings, -15 contact, -10 dates = -115
        let text = "| a | b |\n1/1/2020";
        let report = check_ats_format(text);
        assert_eq!(report.score, 0);
        assert_eq!(report.issues.len(), 4);
    }

    #[test]
    fn test_pure_function_of_text() {
        let text = "| x |\nexperience\n12/12/12";
        assert_eq!(check_ats_format(text), check_ats_format(text));
    }
}
