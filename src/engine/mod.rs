// src/engine/mod.rs
//! Matching and scoring engine: pure, deterministic functions plus a small
//! facade that carries the configured policy.

pub mod growth;
pub mod predict;
pub mod ranking;
pub mod skills;

pub use growth::{score_growth_potential, GrowthReport};
pub use predict::{predict_success, BlendWeights, Prediction};
pub use ranking::{rank_postings, top_k, RankedPosting};
pub use skills::{match_skills, SkillMatch, SkillWeighting};

use crate::config::EngineConfig;
use crate::types::{CandidateProfile, JobPosting};

/// Engine facade binding the scoring functions to one configuration.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: EngineConfig,
}

impl MatchingEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn match_skills(&self, profile: &CandidateProfile, posting: &JobPosting) -> SkillMatch {
        skills::match_skills(
            &profile.normalized_skills(),
            posting.skill_keywords.as_deref(),
            self.config.weighting,
        )
    }

    pub fn score_growth_potential(&self, profile: &CandidateProfile) -> GrowthReport {
        growth::score_growth_potential(profile)
    }

    pub fn predict_success(&self, skill_score: f64, growth_score: f64) -> Prediction {
        predict::predict_success(skill_score, growth_score, self.config.blend)
    }

    /// Full ranked list; see `ranking::rank_postings` for the ordering contract.
    pub fn rank(&self, postings: &[JobPosting], profile: &CandidateProfile) -> Vec<RankedPosting> {
        ranking::rank_postings(postings, profile, &self.config)
    }

    /// Ranked list truncated to the configured top-K for detailed display.
    pub fn rank_top(
        &self,
        postings: &[JobPosting],
        profile: &CandidateProfile,
    ) -> Vec<RankedPosting> {
        ranking::top_k(self.rank(postings, profile), self.config.top_k)
    }
}
