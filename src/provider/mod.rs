// src/provider/mod.rs
//! Dataset providers: every source of postings implements the same interface
//! and names itself, so callers always know where a dataset came from.

pub mod csv;
pub mod sqlite;
pub mod synthetic;

pub use csv::CsvProvider;
pub use sqlite::SqliteProvider;
pub use synthetic::SyntheticProvider;

use crate::types::JobPosting;
use thiserror::Error;

/// Provider failures are surfaced to the caller, never converted into a
/// valid-looking empty dataset.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("dataset unavailable: {0}")]
    Unavailable(String),
    #[error("malformed dataset: {0}")]
    Malformed(String),
    #[error("dataset unavailable: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed dataset: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("dataset unavailable: {0}")]
    Sql(#[from] sqlx::Error),
}

/// A source of job-posting records.
#[allow(async_fn_in_trait)]
pub trait DatasetProvider {
    /// Stable provider label, attached to results and logs.
    fn name(&self) -> &'static str;

    /// Load the full posting set. An empty collection is a valid result;
    /// failures are errors, never silently empty.
    async fn load(&self) -> Result<Vec<JobPosting>, ProviderError>;
}
