// src/engine/skills.rs
//! Skill-overlap scoring between a candidate skill set and a posting's
//! comma-separated requirements string.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Weight table for the weighted matching variant. Skills not listed score 1.0.
const SKILL_WEIGHTS: &[(&str, f64)] = &[
    ("ai", 2.0),
    ("ml", 2.0),
    ("python", 1.5),
    ("aws", 1.5),
    ("kubernetes", 1.5),
    ("rust", 1.5),
    ("typescript", 1.2),
    ("react", 1.2),
    ("docker", 1.2),
];

/// Which scoring variant `match_skills` applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillWeighting {
    /// Plain coverage: |matched| / |required| * 100.
    #[default]
    Uniform,
    /// Coverage weighted by the fixed high-value skill table.
    Weighted,
}

/// Result of matching one posting's requirements against a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    /// Percentage in [0, 100].
    pub score: f64,
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
}

impl SkillMatch {
    fn zero() -> Self {
        Self {
            score: 0.0,
            matched: BTreeSet::new(),
            missing: BTreeSet::new(),
        }
    }
}

/// Split a comma-separated requirements string into normalized skill tokens.
pub fn normalize_skill_text(text: &str) -> BTreeSet<String> {
    text.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn skill_weight(token: &str) -> f64 {
    SKILL_WEIGHTS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, w)| *w)
        .unwrap_or(1.0)
}

/// Compute the skill-match score for one posting.
///
/// Candidate skills are expected pre-normalized (see
/// `CandidateProfile::normalized_skills`). An empty candidate set or a
/// null/blank requirements string yields a zero match, never an error.
pub fn match_skills(
    candidate_skills: &BTreeSet<String>,
    required_text: Option<&str>,
    weighting: SkillWeighting,
) -> SkillMatch {
    if candidate_skills.is_empty() {
        return SkillMatch::zero();
    }
    let required = match required_text {
        Some(text) => normalize_skill_text(text),
        None => return SkillMatch::zero(),
    };
    if required.is_empty() {
        return SkillMatch::zero();
    }

    let matched: BTreeSet<String> = required
        .intersection(candidate_skills)
        .cloned()
        .collect();
    let missing: BTreeSet<String> = required.difference(candidate_skills).cloned().collect();

    let score = match weighting {
        SkillWeighting::Uniform => matched.len() as f64 / required.len() as f64 * 100.0,
        SkillWeighting::Weighted => {
            let matched_weight: f64 = matched.iter().map(|s| skill_weight(s)).sum();
            let required_weight: f64 = required.iter().map(|s| skill_weight(s)).sum();
            matched_weight / required_weight * 100.0
        }
    };

    SkillMatch {
        score: score.clamp(0.0, 100.0),
        matched,
        missing,
    }
}
