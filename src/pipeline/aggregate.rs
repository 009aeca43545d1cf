// src/pipeline/aggregate.rs
//! Grouped counts and summary metrics for presentation.

use crate::engine::skills::normalize_skill_text;
use crate::types::JobPosting;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Count postings by an extracted value. Postings where the extractor returns
/// `None` are skipped. Output is sorted by count descending, ties by value
/// ascending, so repeated runs produce identical orderings.
pub fn count_by<F>(postings: &[JobPosting], extract: F) -> Vec<(String, usize)>
where
    F: Fn(&JobPosting) -> Option<String>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for posting in postings {
        if let Some(value) = extract(posting) {
            *counts.entry(value).or_insert(0) += 1;
        }
    }
    sorted_counts(counts)
}

pub fn count_by_category(postings: &[JobPosting]) -> Vec<(String, usize)> {
    count_by(postings, |p| Some(p.category.to_string()))
}

pub fn count_by_region(postings: &[JobPosting]) -> Vec<(String, usize)> {
    count_by(postings, |p| p.region.clone())
}

pub fn count_by_company(postings: &[JobPosting]) -> Vec<(String, usize)> {
    count_by(postings, |p| Some(p.company_name.clone()))
}

/// Count individual skill tokens across all postings.
///
/// Each posting contributes one count per distinct token it lists, after the
/// usual trim/lowercase normalization, so "Python, React" and "python" merge.
pub fn count_skills(postings: &[JobPosting]) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for posting in postings {
        if let Some(text) = &posting.skill_keywords {
            for token in normalize_skill_text(text) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }
    }
    sorted_counts(counts)
}

/// The `n` most-demanded skills.
pub fn top_skills(postings: &[JobPosting], n: usize) -> Vec<(String, usize)> {
    count_skills(postings).into_iter().take(n).collect()
}

fn sorted_counts(counts: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    entries
}

/// Headline numbers for a posting set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetMetrics {
    pub total_jobs: usize,
    pub hiring_count: usize,
    pub hiring_percentage: f64,
    pub partner_count: usize,
    pub partner_percentage: f64,
    pub unique_companies: usize,
    /// Mean reward over postings that offer one; 0 when none do.
    pub avg_reward: f64,
}

pub fn dataset_metrics(postings: &[JobPosting]) -> DatasetMetrics {
    if postings.is_empty() {
        return DatasetMetrics::default();
    }

    let total_jobs = postings.len();
    let hiring_count = postings
        .iter()
        .filter(|p| p.status_code == Some(crate::types::StatusCode::Hiring))
        .count();
    let partner_count = postings.iter().filter(|p| p.is_partner).count();
    let unique_companies = postings
        .iter()
        .map(|p| p.company_name.as_str())
        .collect::<std::collections::HashSet<_>>()
        .len();

    let rewarded: Vec<i64> = postings
        .iter()
        .filter(|p| p.join_reward > 0)
        .map(|p| p.join_reward)
        .collect();
    let avg_reward = if rewarded.is_empty() {
        0.0
    } else {
        rewarded.iter().sum::<i64>() as f64 / rewarded.len() as f64
    };

    DatasetMetrics {
        total_jobs,
        hiring_count,
        hiring_percentage: hiring_count as f64 / total_jobs as f64 * 100.0,
        partner_count,
        partner_percentage: partner_count as f64 / total_jobs as f64 * 100.0,
        unique_companies,
        avg_reward,
    }
}
