// src/engine/predict.rs
//! Blend skill-match and growth scores into a capped success probability.

use serde::{Deserialize, Serialize};

/// Balanced blend: the default policy for ranking.
pub const BALANCED_BLEND: BlendWeights = BlendWeights {
    skill: 0.6,
    growth: 0.4,
};

/// Skill-heavy blend kept for callers that want match quality to dominate.
pub const SKILL_HEAVY_BLEND: BlendWeights = BlendWeights {
    skill: 0.7,
    growth: 0.3,
};

/// The probability never reaches 100: the heuristic does not claim certainty.
pub const PROBABILITY_CAP: f64 = 95.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendWeights {
    pub skill: f64,
    pub growth: f64,
}

impl BlendWeights {
    pub fn sum(&self) -> f64 {
        self.skill + self.growth
    }
}

impl Default for BlendWeights {
    fn default() -> Self {
        BALANCED_BLEND
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// In [0, 95].
    pub probability: f64,
    /// Display-only, in [60, 90]; never used for ranking.
    pub confidence: f64,
}

/// Combine a skill-match score and a growth score, both on a 0-100 scale.
pub fn predict_success(skill_score: f64, growth_score: f64, blend: BlendWeights) -> Prediction {
    let raw = skill_score * blend.skill + growth_score * blend.growth;
    Prediction {
        probability: raw.clamp(0.0, PROBABILITY_CAP),
        confidence: ((skill_score + growth_score) / 2.0).clamp(60.0, 90.0),
    }
}
