use serde::{Deserialize, Serialize};

/// An uploaded document after extraction and normalization. Never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub raw_text: String,
    pub normalized_text: String,
}

/// Years of experience a job description asks for. `(0, 0)` means none was stated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRequirement {
    pub min_years: u32,
    pub max_years: u32,
}

impl ExperienceRequirement {
    pub fn new(min_years: u32, max_years: u32) -> Self {
        Self {
            min_years,
            max_years,
        }
    }

    pub fn is_unspecified(&self) -> bool {
        self.min_years == 0 && self.max_years == 0
    }
}

/// Formatting issues found by the ATS checker, in check order, plus the resulting score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsReport {
    pub issues: Vec<String>,
    /// 0 – 100
    pub score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescription {
    pub document: Document,
    /// Ordered subset of the skill vocabulary.
    pub required_skills: Vec<String>,
    pub experience: ExperienceRequirement,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub document: Document,
    /// Ordered subset of the skill vocabulary.
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub ats: AtsReport,
}

impl JobDescription {
    pub fn name(&self) -> &str {
        &self.document.name
    }
}

impl Resume {
    pub fn name(&self) -> &str {
        &self.document.name
    }
}
