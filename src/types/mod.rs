// src/types/mod.rs
pub mod posting;
pub mod profile;

pub use posting::{JobCategory, JobLevel, JobPosting, StatusCode};
pub use profile::CandidateProfile;
