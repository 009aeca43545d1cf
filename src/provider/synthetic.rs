// src/provider/synthetic.rs
//! Deterministic synthetic dataset, clearly labelled as such.
//!
//! Demo and test data only. This provider is never substituted for a real
//! source behind the caller's back; its `name()` makes the origin visible.

use super::{DatasetProvider, ProviderError};
use crate::types::{JobCategory, JobLevel, JobPosting, StatusCode};
use chrono::Utc;
use tracing::info;

const REGIONS: [&str; 7] = [
    "PANGYO", "GANGNAM", "HONGDAE", "JONGNO", "YEOUIDO", "BUNDANG", "SEOCHO",
];

const COMPANIES: [&str; 7] = [
    "NovaSoft",
    "BrightLoop",
    "Hanbit Systems",
    "Cloudbase Korea",
    "Merakit",
    "Orbital Labs",
    "Daum Ventures",
];

const REWARD_STEPS: [i64; 6] = [0, 50_000, 100_000, 200_000, 300_000, 500_000];

const DEVELOPER_SKILLS: [&str; 12] = [
    "Python",
    "JavaScript",
    "React",
    "Node.js",
    "Java",
    "Spring",
    "Django",
    "Vue.js",
    "TypeScript",
    "Docker",
    "AWS",
    "Kubernetes",
];
const DESIGN_SKILLS: [&str; 9] = [
    "Figma",
    "Sketch",
    "Adobe XD",
    "Photoshop",
    "Illustrator",
    "Principle",
    "Zeplin",
    "InVision",
    "Framer",
];
const MARKETING_SKILLS: [&str; 7] = [
    "Google Analytics",
    "Facebook Ads",
    "SEO",
    "Content Marketing",
    "Social Media",
    "Performance Marketing",
    "CRM",
];
const MANAGEMENT_SKILLS: [&str; 6] = [
    "Project Management",
    "Team Leadership",
    "Strategic Planning",
    "Business Analysis",
    "Agile",
    "Scrum",
];

fn skill_pool(category: JobCategory) -> &'static [&'static str] {
    match category {
        JobCategory::Developer => &DEVELOPER_SKILLS,
        JobCategory::Design => &DESIGN_SKILLS,
        JobCategory::Marketing => &MARKETING_SKILLS,
        JobCategory::Management => &MANAGEMENT_SKILLS,
    }
}

/// xorshift64; reproducible across runs for a given seed, which is all the
/// synthetic data needs.
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, bound: usize) -> usize {
        (self.next() % bound as u64) as usize
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }
}

pub struct SyntheticProvider {
    seed: u64,
    count: usize,
}

impl SyntheticProvider {
    pub fn new(seed: u64, count: usize) -> Self {
        Self { seed, count }
    }

    /// Generate the posting set synchronously; `load` wraps this.
    pub fn generate(&self) -> Vec<JobPosting> {
        let mut rng = Rng::new(self.seed);
        let now = Utc::now();

        (0..self.count)
            .map(|i| {
                let category = *rng.pick(&JobCategory::ALL);
                let company = *rng.pick(&COMPANIES);
                let pool = skill_pool(category);

                // 3 to 6 distinct skills drawn from the category pool.
                let skill_count = 3 + rng.below(4);
                let mut skills: Vec<&str> = Vec::with_capacity(skill_count);
                while skills.len() < skill_count {
                    let skill = *rng.pick(pool);
                    if !skills.contains(&skill) {
                        skills.push(skill);
                    }
                }

                JobPosting {
                    id: i as i64 + 1,
                    category,
                    region: Some((*rng.pick(&REGIONS)).to_string()),
                    company_name: company.to_string(),
                    title: format!("{} opening at {}", category, company),
                    status_code: Some(*rng.pick(&[StatusCode::Hiring, StatusCode::Closed])),
                    is_partner: rng.below(2) == 1,
                    join_reward: *rng.pick(&REWARD_STEPS),
                    skill_keywords: Some(skills.join(", ")),
                    job_level: Some(*rng.pick(&[
                        JobLevel::Irrelevant,
                        JobLevel::Junior,
                        JobLevel::Senior,
                        JobLevel::Lead,
                    ])),
                    created_at: now,
                }
            })
            .collect()
    }
}

impl Default for SyntheticProvider {
    fn default() -> Self {
        Self::new(42, 200)
    }
}

impl DatasetProvider for SyntheticProvider {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn load(&self) -> Result<Vec<JobPosting>, ProviderError> {
        let postings = self.generate();
        info!(
            "Generated {} synthetic postings (seed {})",
            postings.len(),
            self.seed
        );
        Ok(postings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_dataset() {
        let a = SyntheticProvider::new(7, 50).generate();
        let b = SyntheticProvider::new(7, 50).generate();
        assert_eq!(a.len(), 50);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.category, y.category);
            assert_eq!(x.skill_keywords, y.skill_keywords);
            assert_eq!(x.join_reward, y.join_reward);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = SyntheticProvider::new(1, 50).generate();
        let b = SyntheticProvider::new(2, 50).generate();
        let same = a
            .iter()
            .zip(&b)
            .all(|(x, y)| x.skill_keywords == y.skill_keywords && x.company_name == y.company_name);
        assert!(!same);
    }

    #[test]
    fn test_generated_records_are_well_formed() {
        for posting in SyntheticProvider::default().generate() {
            assert!(posting.id > 0);
            assert!(posting.join_reward >= 0);
            assert!(REWARD_STEPS.contains(&posting.join_reward));
            let skills = posting.skill_keywords.as_deref().unwrap();
            let tokens: Vec<&str> = skills.split(',').map(str::trim).collect();
            assert!((3..=6).contains(&tokens.len()));
            assert!(!posting.company_name.is_empty());
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let postings = SyntheticProvider::default().generate();
        let mut ids: Vec<i64> = postings.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), postings.len());
    }
}
