// src/engine/ranking.rs
//! Rank filtered postings for a candidate: score, threshold, sort, truncate.

use crate::config::EngineConfig;
use crate::engine::growth::score_growth_potential;
use crate::engine::predict::predict_success;
use crate::engine::skills::{match_skills, SkillMatch};
use crate::types::{CandidateProfile, JobPosting};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One posting scored for a specific candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPosting {
    pub id: i64,
    pub company_name: String,
    pub title: String,
    pub region: Option<String>,
    pub join_reward: i64,
    pub skill_match: SkillMatch,
    pub probability: f64,
    pub confidence: f64,
}

/// Score every posting against the candidate and return the full ranked list.
///
/// Postings below `config.min_match_score` are dropped. Ordering is
/// deterministic: success probability descending, then skill score descending,
/// then posting id ascending.
pub fn rank_postings(
    postings: &[JobPosting],
    profile: &CandidateProfile,
    config: &EngineConfig,
) -> Vec<RankedPosting> {
    let candidate_skills = profile.normalized_skills();
    // Growth is posting-independent; compute it once per pass.
    let growth = score_growth_potential(profile);

    let mut ranked: Vec<RankedPosting> = postings
        .iter()
        .filter_map(|posting| {
            let skill_match = match_skills(
                &candidate_skills,
                posting.skill_keywords.as_deref(),
                config.weighting,
            );
            if skill_match.score < config.min_match_score {
                return None;
            }
            let prediction = predict_success(skill_match.score, growth.score, config.blend);
            Some(RankedPosting {
                id: posting.id,
                company_name: posting.company_name.clone(),
                title: posting.title.clone(),
                region: posting.region.clone(),
                join_reward: posting.join_reward,
                skill_match,
                probability: prediction.probability,
                confidence: prediction.confidence,
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(Ordering::Equal)
            .then(
                b.skill_match
                    .score
                    .partial_cmp(&a.skill_match.score)
                    .unwrap_or(Ordering::Equal),
            )
            .then(a.id.cmp(&b.id))
    });
    ranked
}

/// Truncate a ranked list for detailed display.
pub fn top_k(ranked: Vec<RankedPosting>, k: usize) -> Vec<RankedPosting> {
    ranked.into_iter().take(k).collect()
}
