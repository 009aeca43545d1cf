// src/pipeline/mod.rs
//! Filtering and aggregation over a loaded posting set.

pub mod aggregate;
pub mod filter;

pub use aggregate::{
    count_by, count_by_category, count_by_company, count_by_region, count_skills,
    dataset_metrics, top_skills, DatasetMetrics,
};
pub use filter::{filter_postings, FilterSpec};
