pub mod document;
pub mod matching;

pub use document::{AtsReport, Document, ExperienceRequirement, JobDescription, Resume};
pub use matching::{Feedback, FeedbackSeverity, MatchResult, RankedResume, ScreeningReport};
