//! Skill matcher — exact, case-insensitive substring search over a fixed vocabulary.

use crate::screening::normalizer::normalize;

/// Built-in vocabulary, in reporting order.
pub const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "sql",
    "machine learning",
    "excel",
    "communication",
    "project management",
    "power bi",
    "r",
    "data analysis",
    "cloud",
    "aws",
    "azure",
];

/// Ordered list of lowercase skill phrases that detected skill sets are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    phrases: Vec<String>,
    /// Each phrase run through the normalizer, so it lines up with normalized text.
    patterns: Vec<String>,
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS.iter().map(|s| s.to_string()))
    }
}

impl SkillVocabulary {
    pub fn new(phrases: impl IntoIterator<Item = String>) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for phrase in phrases.into_iter().map(|p| p.trim().to_lowercase()) {
            if !phrase.is_empty() && !unique.contains(&phrase) {
                unique.push(phrase);
            }
        }
        let patterns = unique
            .iter()
            .map(|phrase| {
                let normalized = normalize(phrase);
                if normalized.is_empty() {
                    phrase.clone()
                } else {
                    normalized
                }
            })
            .collect();

        Self {
            phrases: unique,
            patterns,
        }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Returns every vocabulary phrase that occurs in normalized `text`, in
    /// vocabulary order. Multi-word phrases must appear contiguously; there is
    /// no fuzzy matching.
    pub fn detect(&self, text: &str) -> Vec<String> {
        let haystack = text.to_lowercase();
        self.phrases
            .iter()
            .zip(&self.patterns)
            .filter(|(_, pattern)| haystack.contains(pattern.as_str()))
            .map(|(phrase, _)| phrase.clone())
            .collect()
    }
}
