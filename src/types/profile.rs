// src/types/profile.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Candidate profile supplied by the caller for a single scoring pass.
///
/// Skills are kept as entered; normalization (trim, lowercase, dedup) happens
/// once via `normalized_skills` before any matching.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CandidateProfile {
    pub skills: Vec<String>,
    pub recent_courses: u32,
    pub project_count: u32,
    pub github_contributions: u32,
}

impl CandidateProfile {
    pub fn new(skills: Vec<String>) -> Self {
        Self {
            skills,
            ..Self::default()
        }
    }

    pub fn with_recent_courses(mut self, count: u32) -> Self {
        self.recent_courses = count;
        self
    }

    pub fn with_project_count(mut self, count: u32) -> Self {
        self.project_count = count;
        self
    }

    pub fn with_github_contributions(mut self, count: u32) -> Self {
        self.github_contributions = count;
        self
    }

    /// Trimmed, lowercased, deduplicated skill tokens.
    pub fn normalized_skills(&self) -> BTreeSet<String> {
        self.skills
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
