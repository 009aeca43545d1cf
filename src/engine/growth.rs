// src/engine/growth.rs
//! Rule-based growth-potential scoring over a candidate profile.
//!
//! This is a fixed additive rule table, not a model: each rule fires
//! independently and the sum is clamped to 100.

use crate::types::CandidateProfile;
use serde::Serialize;

/// Skills that count toward the "modern technology interest" rule.
const MODERN_SKILLS: &[&str] = &[
    "ai",
    "ml",
    "docker",
    "kubernetes",
    "react",
    "vue",
    "typescript",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthReport {
    /// Score in [0, 100].
    pub score: f64,
    /// Labels of the rules that fired, in rule-table order.
    pub factors: Vec<&'static str>,
}

/// Score a candidate's growth signals.
///
/// Monotonic non-decreasing in each numeric profile field.
pub fn score_growth_potential(profile: &CandidateProfile) -> GrowthReport {
    let mut score: f64 = 0.0;
    let mut factors = Vec::new();

    if profile.recent_courses > 0 {
        score += 20.0;
        factors.push("recent learning activity");
    }
    if profile.project_count > 3 {
        score += 25.0;
        factors.push("project experience");
    }

    let skills = profile.normalized_skills();
    if skills.len() > 8 {
        score += 20.0;
        factors.push("skill diversity");
    }
    if profile.github_contributions > 100 {
        score += 15.0;
        factors.push("open-source contribution");
    }
    if skills.iter().any(|s| MODERN_SKILLS.contains(&s.as_str())) {
        score += 20.0;
        factors.push("modern technology interest");
    }

    GrowthReport {
        score: score.min(100.0),
        factors,
    }
}
