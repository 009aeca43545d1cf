// src/types/posting.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Job category as tagged in the source feeds. Every posting carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobCategory {
    Developer,
    Design,
    Marketing,
    Management,
}

impl JobCategory {
    pub const ALL: [JobCategory; 4] = [
        JobCategory::Developer,
        JobCategory::Design,
        JobCategory::Marketing,
        JobCategory::Management,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobCategory::Developer => "DEVELOPER",
            JobCategory::Design => "DESIGN",
            JobCategory::Marketing => "MARKETING",
            JobCategory::Management => "MANAGEMENT",
        }
    }
}

impl FromStr for JobCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEVELOPER" => Ok(JobCategory::Developer),
            "DESIGN" => Ok(JobCategory::Design),
            "MARKETING" => Ok(JobCategory::Marketing),
            "MANAGEMENT" => Ok(JobCategory::Management),
            other => Err(format!("Unknown job category: {}", other)),
        }
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
    Hiring,
    Closed,
    Pending,
}

impl StatusCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCode::Hiring => "HIRING",
            StatusCode::Closed => "CLOSED",
            StatusCode::Pending => "PENDING",
        }
    }

    /// Lenient parse for feed data; unrecognized codes become None.
    pub fn parse_opt(s: Option<&str>) -> Option<StatusCode> {
        s.and_then(|v| v.parse().ok())
    }
}

impl FromStr for StatusCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "HIRING" => Ok(StatusCode::Hiring),
            "CLOSED" => Ok(StatusCode::Closed),
            "PENDING" => Ok(StatusCode::Pending),
            other => Err(format!("Unknown status code: {}", other)),
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobLevel {
    Junior,
    Senior,
    Lead,
    Irrelevant,
}

impl JobLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobLevel::Junior => "JUNIOR",
            JobLevel::Senior => "SENIOR",
            JobLevel::Lead => "LEAD",
            JobLevel::Irrelevant => "IRRELEVANT",
        }
    }

    pub fn parse_opt(s: Option<&str>) -> Option<JobLevel> {
        match s.map(|v| v.trim().to_uppercase()).as_deref() {
            Some("JUNIOR") => Some(JobLevel::Junior),
            Some("SENIOR") => Some(JobLevel::Senior),
            Some("LEAD") => Some(JobLevel::Lead),
            Some("IRRELEVANT") => Some(JobLevel::Irrelevant),
            _ => None,
        }
    }
}

impl fmt::Display for JobLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One job-posting record as supplied by a dataset provider.
///
/// Records are constructed once per dataset load and never mutated; the engine
/// treats them as read-only input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: i64,
    pub category: JobCategory,
    pub region: Option<String>,
    pub company_name: String,
    pub title: String,
    pub status_code: Option<StatusCode>,
    pub is_partner: bool,
    pub join_reward: i64,
    pub skill_keywords: Option<String>,
    pub job_level: Option<JobLevel>,
    pub created_at: DateTime<Utc>,
}

impl JobPosting {
    /// Parse the 0/1 and "True"/"False" boolean encodings found in the feeds.
    pub fn parse_flag(s: &str) -> bool {
        matches!(s.trim().to_lowercase().as_str(), "1" | "true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in JobCategory::ALL {
            assert_eq!(category.as_str().parse::<JobCategory>(), Ok(category));
        }
        assert!("QUANT".parse::<JobCategory>().is_err());
    }

    #[test]
    fn test_lenient_status_parsing() {
        assert_eq!(StatusCode::parse_opt(Some("hiring")), Some(StatusCode::Hiring));
        assert_eq!(StatusCode::parse_opt(Some(" CLOSED ")), Some(StatusCode::Closed));
        assert_eq!(StatusCode::parse_opt(Some("???")), None);
        assert_eq!(StatusCode::parse_opt(None), None);
    }

    #[test]
    fn test_strict_status_parsing() {
        assert_eq!("hiring".parse::<StatusCode>(), Ok(StatusCode::Hiring));
        assert_eq!(" PENDING ".parse::<StatusCode>(), Ok(StatusCode::Pending));
        assert!("HIRNG".parse::<StatusCode>().is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert!(JobPosting::parse_flag("1"));
        assert!(JobPosting::parse_flag("True"));
        assert!(!JobPosting::parse_flag("0"));
        assert!(!JobPosting::parse_flag("False"));
        assert!(!JobPosting::parse_flag(""));
    }
}
