// src/provider/sqlite.rs
//! SQLite provider backed by a sqlx connection pool.

use super::{DatasetProvider, ProviderError};
use crate::types::{JobCategory, JobLevel, JobPosting, StatusCode};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, sqlx::FromRow)]
struct JobRow {
    id: i64,
    job_category: String,
    address_region: Option<String>,
    company_name: String,
    title: String,
    status_code: Option<String>,
    is_partner: i64,
    join_reward: i64,
    job_skill_keywords: Option<String>,
    job_level: Option<String>,
    created_at: DateTime<Utc>,
}

impl JobRow {
    fn into_posting(self) -> Result<JobPosting, String> {
        let category: JobCategory = self.job_category.parse()?;
        Ok(JobPosting {
            id: self.id,
            category,
            region: self.address_region.filter(|r| !r.trim().is_empty()),
            company_name: self.company_name,
            title: self.title,
            status_code: StatusCode::parse_opt(self.status_code.as_deref()),
            is_partner: self.is_partner != 0,
            join_reward: self.join_reward.max(0),
            skill_keywords: self.job_skill_keywords.filter(|s| !s.trim().is_empty()),
            job_level: JobLevel::parse_opt(self.job_level.as_deref()),
            created_at: self.created_at,
        })
    }
}

pub struct SqliteProvider {
    pool: SqlitePool,
}

impl SqliteProvider {
    /// Connect to a database file, creating it (and its parent directory)
    /// when missing.
    pub async fn connect(database_path: &Path) -> Result<Self, ProviderError> {
        if let Some(parent) = database_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let database_url = format!("sqlite:{}?mode=rwc", database_path.display());
        let pool = SqlitePool::connect(&database_url).await?;
        info!("Connected to jobs database: {}", database_url);
        Ok(Self { pool })
    }

    /// In-memory database, used by tests and throwaway imports.
    pub async fn in_memory() -> Result<Self, ProviderError> {
        let pool = SqlitePool::connect("sqlite::memory:").await?;
        Ok(Self { pool })
    }

    /// Create the jobs table and its indexes when absent.
    pub async fn migrate(&self) -> Result<(), ProviderError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS jobs (
                id INTEGER PRIMARY KEY,
                job_category TEXT NOT NULL,
                address_region TEXT,
                company_name TEXT NOT NULL,
                title TEXT NOT NULL,
                status_code TEXT,
                is_partner INTEGER NOT NULL DEFAULT 0,
                join_reward INTEGER NOT NULL DEFAULT 0,
                job_skill_keywords TEXT,
                job_level TEXT,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_jobs_category
            ON jobs(job_category);
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Import a posting set, replacing rows that share an id.
    pub async fn insert_postings(&self, postings: &[JobPosting]) -> Result<(), ProviderError> {
        for posting in postings {
            sqlx::query(
                r#"
                INSERT OR REPLACE INTO jobs (
                    id, job_category, address_region, company_name, title,
                    status_code, is_partner, join_reward, job_skill_keywords,
                    job_level, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(posting.id)
            .bind(posting.category.as_str())
            .bind(&posting.region)
            .bind(&posting.company_name)
            .bind(&posting.title)
            .bind(posting.status_code.map(|s| s.as_str()))
            .bind(posting.is_partner as i64)
            .bind(posting.join_reward)
            .bind(&posting.skill_keywords)
            .bind(posting.job_level.map(|l| l.as_str()))
            .bind(posting.created_at)
            .execute(&self.pool)
            .await?;
        }
        info!("Inserted {} postings into jobs table", postings.len());
        Ok(())
    }
}

impl DatasetProvider for SqliteProvider {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    async fn load(&self) -> Result<Vec<JobPosting>, ProviderError> {
        let rows: Vec<JobRow> = sqlx::query_as(
            r#"
            SELECT id, job_category, address_region, company_name, title,
                   status_code, is_partner, join_reward, job_skill_keywords,
                   job_level, created_at
            FROM jobs
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let row_count = rows.len();
        let mut postings = Vec::with_capacity(row_count);
        for row in rows {
            let id = row.id;
            match row.into_posting() {
                Ok(posting) => postings.push(posting),
                Err(e) => warn!("Skipping job row {}: {}", id, e),
            }
        }
        // Same contract as the CSV provider: a table where nothing parses is
        // malformed, not empty.
        if postings.is_empty() && row_count > 0 {
            return Err(ProviderError::Malformed(format!(
                "no usable rows in jobs table ({} rows skipped)",
                row_count
            )));
        }
        info!("Loaded {} postings from database", postings.len());
        Ok(postings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn insert_raw(db: &SqliteProvider, id: i64, category: &str) {
        sqlx::query(
            r#"
            INSERT INTO jobs (
                id, job_category, address_region, company_name, title,
                status_code, is_partner, join_reward, job_skill_keywords,
                job_level, created_at
            ) VALUES (?, ?, 'PANGYO', 'Acme', 'Engineer', 'HIRING', 0, 0, NULL, NULL, ?)
            "#,
        )
        .bind(id)
        .bind(category)
        .bind(Utc::now())
        .execute(&db.pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_table_with_no_usable_rows_is_malformed() {
        let db = SqliteProvider::in_memory().await.unwrap();
        db.migrate().await.unwrap();
        insert_raw(&db, 1, "PIRATE").await;
        insert_raw(&db, 2, "WIZARD").await;

        match db.load().await {
            Err(ProviderError::Malformed(msg)) => assert!(msg.contains("no usable rows")),
            other => panic!("Expected Malformed, got {:?}", other.map(|p| p.len())),
        }
    }

    #[tokio::test]
    async fn test_occasional_bad_row_is_skipped() {
        let db = SqliteProvider::in_memory().await.unwrap();
        db.migrate().await.unwrap();
        insert_raw(&db, 1, "DEVELOPER").await;
        insert_raw(&db, 2, "PIRATE").await;

        let loaded = db.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 1);
        assert_eq!(loaded[0].category, JobCategory::Developer);
    }
}
