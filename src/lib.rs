// src/lib.rs
//! Job-posting matching and market-analysis engine.
//!
//! The engine itself is pure and synchronous: dataset providers load postings
//! (CSV, SQLite, or a labelled synthetic generator), the pipeline filters and
//! aggregates them, and the matching engine scores and ranks them against a
//! candidate profile.

pub mod cache;
pub mod cli;
pub mod config;
pub mod engine;
pub mod pipeline;
pub mod provider;
pub mod types;

pub use cache::{Clock, DatasetCache, SystemClock};
pub use config::EngineConfig;
pub use engine::{
    match_skills, predict_success, rank_postings, score_growth_potential, GrowthReport,
    MatchingEngine, Prediction, RankedPosting, SkillMatch, SkillWeighting,
};
pub use pipeline::{count_by, count_skills, dataset_metrics, filter_postings, FilterSpec};
pub use provider::{CsvProvider, DatasetProvider, ProviderError, SqliteProvider, SyntheticProvider};
pub use types::{CandidateProfile, JobCategory, JobLevel, JobPosting, StatusCode};
