// src/config.rs
//! Engine configuration: one explicit policy object instead of scattered
//! per-call-site constants.

use crate::engine::predict::BlendWeights;
use crate::engine::skills::SkillWeighting;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Selects the scoring policies the engine applies.
///
/// Defaults: uniform skill matching, 0.6/0.4 success blend, minimum match
/// score 20, top 5 results for detailed display.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngineConfig {
    pub weighting: SkillWeighting,
    pub blend: BlendWeights,
    pub min_match_score: f64,
    pub top_k: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weighting: SkillWeighting::Uniform,
            blend: BlendWeights::default(),
            min_match_score: 20.0,
            top_k: 5,
        }
    }
}

impl EngineConfig {
    /// Load configuration: defaults, then an optional YAML file, then
    /// environment overrides.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;
                let config: EngineConfig = serde_yaml::from_str(&content)
                    .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
                info!("Loaded engine configuration from {}", path.display());
                config
            }
            _ => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Some(threshold) = env_f64("JOBSENSE_MIN_MATCH_SCORE") {
            self.min_match_score = threshold;
        }
        if let Some(top_k) = env_usize("JOBSENSE_TOP_K") {
            self.top_k = top_k;
        }
    }
}

fn env_f64(key: &str) -> Option<f64> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

fn env_usize(key: &str) -> Option<usize> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let config = EngineConfig::default();
        assert_eq!(config.weighting, SkillWeighting::Uniform);
        assert_eq!(config.min_match_score, 20.0);
        assert_eq!(config.top_k, 5);
        assert!((config.blend.skill - 0.6).abs() < 1e-9);
        assert!((config.blend.growth - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_parse_yaml_config() {
        let yaml = "weighting: weighted\nmin_match_score: 15\nblend:\n  skill: 0.7\n  growth: 0.3\n";
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.weighting, SkillWeighting::Weighted);
        assert_eq!(config.min_match_score, 15.0);
        assert!((config.blend.skill - 0.7).abs() < 1e-9);
        // Unspecified fields keep their defaults.
        assert_eq!(config.top_k, 5);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = EngineConfig::load(Some(Path::new("/nonexistent/jobsense.yaml"))).unwrap();
        assert_eq!(config.min_match_score, EngineConfig::default().min_match_score);
    }
}
