use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::models::{JobDescription, Resume};
use crate::screening::scoring::ScoringWeights;
use crate::screening::skills::SkillVocabulary;

/// Uploaded collections for the running process. Each upload replaces a
/// collection wholesale; there are no partial updates.
#[derive(Debug, Default)]
pub struct Session {
    pub job_descriptions: Vec<JobDescription>,
    pub resumes: Vec<Resume>,
}

impl Session {
    pub fn replace_job_descriptions(&mut self, jobs: Vec<JobDescription>) {
        self.job_descriptions = jobs;
    }

    pub fn replace_resumes(&mut self, resumes: Vec<Resume>) {
        self.resumes = resumes;
    }

    /// The named job, or the first uploaded one when no name is given.
    pub fn find_job(&self, name: Option<&str>) -> Option<&JobDescription> {
        match name {
            Some(name) => self.job_descriptions.iter().find(|j| j.name() == name),
            None => self.job_descriptions.first(),
        }
    }
}

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Skill phrases detected in jobs and resumes. Fixed for the process lifetime.
    pub vocabulary: Arc<SkillVocabulary>,
    pub weights: Arc<ScoringWeights>,
    pub session: Arc<RwLock<Session>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let vocabulary = match &config.skill_vocabulary {
            Some(skills) => SkillVocabulary::new(skills.iter().cloned()),
            None => SkillVocabulary::default(),
        };

        Self {
            config,
            vocabulary: Arc::new(vocabulary),
            weights: Arc::new(ScoringWeights::default()),
            session: Arc::new(RwLock::new(Session::default())),
        }
    }
}
