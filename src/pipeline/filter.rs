// src/pipeline/filter.rs
//! Conjunctive filtering over an in-memory posting set.

use crate::types::{JobCategory, JobPosting, StatusCode};
use serde::{Deserialize, Serialize};

/// Filter configuration. `None` for a categorical field means "all" and
/// excludes nothing; the default spec is the identity filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSpec {
    pub category: Option<JobCategory>,
    pub region: Option<String>,
    pub status: Option<StatusCode>,
    pub partner_only: bool,
    /// Inclusive on both bounds.
    pub reward_range: Option<(i64, i64)>,
    /// Case-insensitive substring match over title OR company name.
    pub keyword: Option<String>,
}

impl FilterSpec {
    pub fn with_category(mut self, category: JobCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    pub fn partner_only(mut self) -> Self {
        self.partner_only = true;
        self
    }

    pub fn with_reward_range(mut self, min: i64, max: i64) -> Self {
        self.reward_range = Some((min, max));
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// True when the posting passes every configured filter.
    pub fn matches(&self, posting: &JobPosting) -> bool {
        if let Some(category) = self.category {
            if posting.category != category {
                return false;
            }
        }
        if let Some(region) = &self.region {
            if posting.region.as_deref() != Some(region.as_str()) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if posting.status_code != Some(status) {
                return false;
            }
        }
        if self.partner_only && !posting.is_partner {
            return false;
        }
        if let Some((min, max)) = self.reward_range {
            if posting.join_reward < min || posting.join_reward > max {
                return false;
            }
        }
        if let Some(keyword) = &self.keyword {
            let needle = keyword.to_lowercase();
            let in_title = posting.title.to_lowercase().contains(&needle);
            let in_company = posting.company_name.to_lowercase().contains(&needle);
            if !in_title && !in_company {
                return false;
            }
        }
        true
    }
}

/// Apply a filter spec to a posting set. Input is never mutated.
pub fn filter_postings(postings: &[JobPosting], spec: &FilterSpec) -> Vec<JobPosting> {
    postings
        .iter()
        .filter(|posting| spec.matches(posting))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn posting(id: i64, category: JobCategory, region: &str, reward: i64) -> JobPosting {
        JobPosting {
            id,
            category,
            region: Some(region.into()),
            company_name: format!("Company {}", id),
            title: format!("{} role", category),
            status_code: Some(StatusCode::Hiring),
            is_partner: id % 2 == 0,
            join_reward: reward,
            skill_keywords: None,
            job_level: None,
            created_at: Utc::now(),
        }
    }

    fn dataset() -> Vec<JobPosting> {
        vec![
            posting(1, JobCategory::Developer, "PANGYO", 0),
            posting(2, JobCategory::Developer, "GANGNAM", 100_000),
            posting(3, JobCategory::Design, "PANGYO", 50_000),
            posting(4, JobCategory::Marketing, "HONGDAE", 200_000),
        ]
    }

    #[test]
    fn test_default_spec_is_identity() {
        let postings = dataset();
        let filtered = filter_postings(&postings, &FilterSpec::default());
        assert_eq!(filtered.len(), postings.len());
        let ids: Vec<i64> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let spec = FilterSpec::default()
            .with_category(JobCategory::Developer)
            .with_reward_range(0, 100_000);
        let once = filter_postings(&dataset(), &spec);
        let twice = filter_postings(&once, &spec);
        let once_ids: Vec<i64> = once.iter().map(|p| p.id).collect();
        let twice_ids: Vec<i64> = twice.iter().map(|p| p.id).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let spec = FilterSpec::default()
            .with_category(JobCategory::Developer)
            .with_region("PANGYO");
        let filtered = filter_postings(&dataset(), &spec);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_reward_range_is_inclusive() {
        let spec = FilterSpec::default().with_reward_range(50_000, 100_000);
        let filtered = filter_postings(&dataset(), &spec);
        let ids: Vec<i64> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_partner_only() {
        let spec = FilterSpec::default().partner_only();
        let filtered = filter_postings(&dataset(), &spec);
        let ids: Vec<i64> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_keyword_matches_title_or_company() {
        let spec = FilterSpec::default().with_keyword("company 3");
        let filtered = filter_postings(&dataset(), &spec);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 3);

        let spec = FilterSpec::default().with_keyword("MARKETING");
        let filtered = filter_postings(&dataset(), &spec);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 4);
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let spec = FilterSpec::default().with_keyword("no such company");
        assert!(filter_postings(&dataset(), &spec).is_empty());
    }

    #[test]
    fn test_null_region_excluded_by_region_filter() {
        let mut postings = dataset();
        postings[0].region = None;
        let spec = FilterSpec::default().with_region("PANGYO");
        let filtered = filter_postings(&postings, &spec);
        let ids: Vec<i64> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3]);
    }
}
