//! Similarity Engine — TF-IDF vector space fit on a job description, cosine
//! similarity against resumes projected into it.
//!
//! The space is fit on the job description alone, so resume terms the job never
//! mentions carry zero weight: relevance is measured purely against the job's
//! vocabulary.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Tokens of two or more word characters.
static TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("term pattern should compile"));

/// TF-IDF vectorizer with smoothed IDF and L2-normalized output.
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    /// term → column index, columns ordered alphabetically
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    /// Learns the vocabulary and IDF weights from `documents`.
    ///
    /// idf(t) = ln((1 + n) / (1 + df(t))) + 1
    pub fn fit(documents: &[&str]) -> Self {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let mut seen: Vec<&str> = tokenize(doc).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *document_frequency.entry(term.to_string()).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (index, (term, df)) in document_frequency.into_iter().enumerate() {
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        Self { vocabulary, idf }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Projects `document` into the fitted space. Unknown terms are dropped.
    /// Returns the zero vector when nothing is in vocabulary.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in tokenize(document) {
            if let Some(&index) = self.vocabulary.get(term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector = vec![0.0; self.vocabulary.len()];
        for (index, count) in counts {
            vector[index] = count * self.idf[index];
        }

        let norm = magnitude(&vector);
        if norm > 0.0 {
            vector.iter_mut().for_each(|w| *w /= norm);
        }
        vector
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    TERM.find_iter(text).map(|m| m.as_str())
}

fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine similarity; 0.0 when either vector is zero or lengths differ.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let (mag_a, mag_b) = (magnitude(a), magnitude(b));

    if mag_a == 0.0 || mag_b == 0.0 {
        0.0
    } else {
        (dot / (mag_a * mag_b)).clamp(0.0, 1.0)
    }
}

/// Scores every resume against the job description, preserving input order.
pub fn similarity_scores<'a, I>(job_text: &str, resume_texts: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a str>,
{
    let vectorizer = TfIdfVectorizer::fit(&[job_text]);
    let job_vector = vectorizer.transform(job_text);
    debug!(terms = vectorizer.vocabulary_len(), "Fitted job vocabulary");

    resume_texts
        .into_iter()
        .map(|text| cosine_similarity(&job_vector, &vectorizer.transform(text)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_text_scores_one() {
        let text = "python developer sql python cloud";
        let scores = similarity_scores(text, [text]);
        assert!((scores[0] - 1.0).abs() < 1e-9, "score was {}", scores[0]);
    }

    #[test]
    fn test_empty_job_scores_zero_without_error() {
        let scores = similarity_scores("", ["python sql", ""]);
        assert_eq!(scores, vec![0.0, 0.0]);
    }

    #[test]
    fn test_empty_resume_scores_zero() {
        assert_eq!(similarity_scores("python developer", [""]), vec![0.0]);
    }

    #[test]
    fn test_out_of_vocabulary_resume_scores_zero() {
        let scores = similarity_scores("python developer", ["chef pastry baking"]);
        assert_eq!(scores, vec![0.0]);
    }

    #[test]
    fn test_out_of_vocabulary_terms_do_not_dilute() {
        let scores = similarity_scores("python sql", ["python sql", "python sql gardening cooking"]);
        assert!((scores[0] - scores[1]).abs() < 1e-9);
    }

    #[test]
    fn test_more_overlap_scores_higher_and_order_is_preserved() {
        let job = "python sql cloud aws";
        let scores = similarity_scores(job, ["python", "python sql cloud", "excel"]);
        assert_eq!(scores.len(), 3);
        assert!(scores[1] > scores[0]);
        assert_eq!(scores[2], 0.0);
        assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
    }

    #[test]
    fn test_single_character_tokens_ignored() {
        let vectorizer = TfIdfVectorizer::fit(&["r c python"]);
        assert_eq!(vectorizer.vocabulary_len(), 1);
    }

    #[test]
    fn test_idf_is_smoothed() {
        // term in 1 of 2 docs: ln(3/2) + 1; term in both: ln(3/3) + 1 = 1
        let vectorizer = TfIdfVectorizer::fit(&["rust go", "rust"]);
        let v = vectorizer.transform("go rust");
        let go_weight = (1.5f64).ln() + 1.0;
        let norm = (go_weight * go_weight + 1.0).sqrt();
        // columns are alphabetical: go, rust
        assert!((v[0] - go_weight / norm).abs() < 1e-12);
        assert!((v[1] - 1.0 / norm).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_handles_mismatched_and_zero_vectors() {
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }
}
