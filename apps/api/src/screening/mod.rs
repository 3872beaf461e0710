//! Screening — turns uploaded job descriptions and resumes into ranked matches.
//!
//! normalizer → skills / experience / ats → similarity → scoring → ranker,
//! composed by `pipeline` and exposed over HTTP by `handlers`.

pub mod ats;
pub mod experience;
pub mod handlers;
pub mod normalizer;
pub mod pipeline;
pub mod ranker;
pub mod scoring;
pub mod similarity;
pub mod skills;
