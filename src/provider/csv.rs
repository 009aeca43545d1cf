// src/provider/csv.rs
//! CSV provider reading the per-category export files.

use super::{DatasetProvider, ProviderError};
use crate::types::{JobCategory, JobLevel, JobPosting, StatusCode};
use chrono::Utc;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// One file per category, as produced by the scraping exports.
const CSV_FILES: [(JobCategory, &str); 4] = [
    (JobCategory::Developer, "rallit_developer_jobs.csv"),
    (JobCategory::Design, "rallit_design_jobs.csv"),
    (JobCategory::Marketing, "rallit_marketing_jobs.csv"),
    (JobCategory::Management, "rallit_management_jobs.csv"),
];

/// Raw CSV row. Headers are camelCase; booleans arrive as "True"/"False" or
/// 0/1 depending on the export, so everything lands as strings first.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    id: i64,
    title: String,
    company_name: String,
    #[serde(default)]
    address_region: Option<String>,
    #[serde(default)]
    status_code: Option<String>,
    #[serde(default)]
    is_partner: Option<String>,
    #[serde(default)]
    join_reward: Option<i64>,
    #[serde(default)]
    job_skill_keywords: Option<String>,
    #[serde(default)]
    job_level: Option<String>,
}

impl CsvRow {
    fn into_posting(self, category: JobCategory) -> JobPosting {
        JobPosting {
            id: self.id,
            category,
            region: self.address_region.filter(|r| !r.trim().is_empty()),
            company_name: self.company_name,
            title: self.title,
            status_code: StatusCode::parse_opt(self.status_code.as_deref()),
            is_partner: self
                .is_partner
                .map(|v| JobPosting::parse_flag(&v))
                .unwrap_or(false),
            join_reward: self.join_reward.unwrap_or(0).max(0),
            skill_keywords: self.job_skill_keywords.filter(|s| !s.trim().is_empty()),
            job_level: JobLevel::parse_opt(self.job_level.as_deref()),
            created_at: Utc::now(),
        }
    }
}

/// Loads postings from the four per-category CSV files in a data directory.
/// Missing individual files are tolerated; a directory with none of them is
/// a "dataset unavailable" error.
pub struct CsvProvider {
    data_dir: PathBuf,
}

impl CsvProvider {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn load_file(&self, path: &Path, category: JobCategory) -> Result<Vec<JobPosting>, ProviderError> {
        let mut reader = ::csv::Reader::from_path(path)?;
        let mut postings = Vec::new();
        let mut skipped = 0usize;
        for (line, record) in reader.deserialize::<CsvRow>().enumerate() {
            match record {
                Ok(row) => postings.push(row.into_posting(category)),
                Err(e) => {
                    // Tolerate individual bad rows, keep the rest of the file.
                    warn!("Skipping malformed row {} in {}: {}", line + 2, path.display(), e);
                    skipped += 1;
                }
            }
        }
        // A file whose every data row fails to parse is a broken dataset,
        // not a valid empty one.
        if postings.is_empty() && skipped > 0 {
            return Err(ProviderError::Malformed(format!(
                "no usable rows in {} ({} rows skipped)",
                path.display(),
                skipped
            )));
        }
        info!("Loaded {} postings from {}", postings.len(), path.display());
        Ok(postings)
    }
}

impl DatasetProvider for CsvProvider {
    fn name(&self) -> &'static str {
        "csv"
    }

    async fn load(&self) -> Result<Vec<JobPosting>, ProviderError> {
        let mut postings = Vec::new();
        let mut files_found = 0;

        for (category, filename) in CSV_FILES {
            let path = self.data_dir.join(filename);
            if !path.exists() {
                warn!("CSV file not found: {}", path.display());
                continue;
            }
            files_found += 1;
            postings.extend(self.load_file(&path, category)?);
        }

        if files_found == 0 {
            return Err(ProviderError::Unavailable(format!(
                "no posting CSV files in {}",
                self.data_dir.display()
            )));
        }
        Ok(postings)
    }
}

/// Write postings to per-category CSV files, producing the same layout the
/// provider reads back.
pub fn export_csv(postings: &[JobPosting], data_dir: &Path) -> Result<Vec<PathBuf>, ProviderError> {
    std::fs::create_dir_all(data_dir)?;
    let mut written = Vec::new();

    for (category, filename) in CSV_FILES {
        let rows: Vec<&JobPosting> = postings.iter().filter(|p| p.category == category).collect();
        if rows.is_empty() {
            continue;
        }
        let path = data_dir.join(filename);
        let count = rows.len();
        let mut writer = ::csv::Writer::from_path(&path)?;
        writer.write_record([
            "id",
            "title",
            "companyName",
            "addressRegion",
            "statusCode",
            "isPartner",
            "joinReward",
            "jobSkillKeywords",
            "jobLevel",
        ])?;
        for posting in rows {
            writer.write_record([
                posting.id.to_string(),
                posting.title.clone(),
                posting.company_name.clone(),
                posting.region.clone().unwrap_or_default(),
                posting
                    .status_code
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
                if posting.is_partner { "1" } else { "0" }.to_string(),
                posting.join_reward.to_string(),
                posting.skill_keywords.clone().unwrap_or_default(),
                posting.job_level.map(|l| l.to_string()).unwrap_or_default(),
            ])?;
        }
        writer.flush()?;
        info!("Wrote {} postings to {}", count, path.display());
        written.push(path);
    }
    Ok(written)
}
