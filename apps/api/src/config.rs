use anyhow::{Context, Result};

/// Default request body limit: 10 MiB covers a handful of resumes per batch.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Number of ranked resumes returned when a request does not ask for a count.
    pub top_n: usize,
    pub max_upload_bytes: usize,
    /// Replaces the built-in skill vocabulary when set.
    pub skill_vocabulary: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            top_n: 10,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            skill_vocabulary: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            top_n: parse_env("TOP_N", defaults.top_n)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            skill_vocabulary: std::env::var("SKILL_VOCABULARY")
                .ok()
                .map(|raw| parse_vocabulary(&raw))
                .filter(|skills| !skills.is_empty()),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Splits a comma-separated vocabulary, lowercasing and dropping blanks and repeats.
pub fn parse_vocabulary(raw: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for skill in raw.split(',').map(|s| s.trim().to_lowercase()) {
        if !skill.is_empty() && !skills.contains(&skill) {
            skills.push(skill);
        }
    }
    skills
}
