// src/cli.rs
use crate::config::EngineConfig;
use crate::engine::MatchingEngine;
use crate::pipeline::{
    count_by_category, count_by_region, dataset_metrics, filter_postings, top_skills, FilterSpec,
};
use crate::provider::{csv, CsvProvider, DatasetProvider, SqliteProvider, SyntheticProvider};
use crate::types::{CandidateProfile, JobCategory, JobPosting, StatusCode};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "jobsense")]
#[command(about = "Match candidate skills against job postings and analyze the market")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the per-category posting CSV files
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Load postings from this SQLite database instead of CSV files
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Use the synthetic dataset provider (demo data, clearly labelled)
    #[arg(long)]
    pub synthetic: bool,

    /// Optional engine configuration file
    #[arg(long, default_value = "jobsense.yaml")]
    pub config: PathBuf,
}

#[derive(Args, Clone)]
pub struct FilterArgs {
    /// Restrict to one category (DEVELOPER, DESIGN, MARKETING, MANAGEMENT)
    #[arg(long)]
    pub category: Option<JobCategory>,

    /// Restrict to one region
    #[arg(long)]
    pub region: Option<String>,

    /// Restrict to one status code (HIRING, CLOSED, PENDING)
    #[arg(long)]
    pub status: Option<StatusCode>,

    /// Partner companies only
    #[arg(long)]
    pub partner_only: bool,

    /// Postings that offer a join reward only
    #[arg(long)]
    pub rewarded_only: bool,

    /// Case-insensitive keyword over title and company name
    #[arg(long)]
    pub keyword: Option<String>,
}

impl FilterArgs {
    fn to_spec(&self) -> FilterSpec {
        FilterSpec {
            category: self.category,
            region: self.region.clone(),
            status: self.status,
            partner_only: self.partner_only,
            reward_range: self.rewarded_only.then_some((1, i64::MAX)),
            keyword: self.keyword.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print headline metrics and distributions for the dataset
    Stats {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// List the most-demanded skills
    Skills {
        #[arg(long, default_value_t = 15)]
        top: usize,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Rank postings for a candidate profile
    Match {
        /// Comma-separated candidate skills
        #[arg(long)]
        skills: String,
        #[arg(long, default_value_t = 0)]
        courses: u32,
        #[arg(long, default_value_t = 0)]
        projects: u32,
        #[arg(long, default_value_t = 0)]
        contributions: u32,
        /// Emit the full ranked list as JSON instead of a text summary
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Import the CSV files into a SQLite jobs database
    InitDb {
        /// Database file to create or update
        #[arg(long, default_value = "rallit_jobs.db")]
        output: PathBuf,
    },
    /// Write a synthetic dataset to per-category CSV files
    Generate {
        #[arg(long, default_value = "data")]
        out_dir: PathBuf,
        #[arg(long, default_value_t = 200)]
        count: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = EngineConfig::load(Some(&cli.config))?;

    match cli.command {
        Command::Stats { ref filters } => {
            let (postings, provider) = load_postings(&cli).await?;
            let filtered = filter_postings(&postings, &filters.to_spec());
            print_stats(&filtered, provider);
        }
        Command::Skills { top, ref filters } => {
            let (postings, provider) = load_postings(&cli).await?;
            let filtered = filter_postings(&postings, &filters.to_spec());
            println!("Top {} skills ({} postings, provider: {})", top, filtered.len(), provider);
            for (skill, count) in top_skills(&filtered, top) {
                println!("{:>5}  {}", count, skill);
            }
        }
        Command::Match {
            ref skills,
            courses,
            projects,
            contributions,
            json,
            ref filters,
        } => {
            let (postings, provider) = load_postings(&cli).await?;
            let filtered = filter_postings(&postings, &filters.to_spec());

            let profile = CandidateProfile::new(
                skills.split(',').map(|s| s.trim().to_string()).collect(),
            )
            .with_recent_courses(courses)
            .with_project_count(projects)
            .with_github_contributions(contributions);

            let engine = MatchingEngine::new(config);
            print_matches(&engine, &filtered, &profile, provider, json)?;
        }
        Command::InitDb { ref output } => {
            let csv_provider = CsvProvider::new(&cli.data_dir);
            let postings = csv_provider
                .load()
                .await
                .context("Failed to load postings from CSV files")?;
            let db = SqliteProvider::connect(output)
                .await
                .context("Failed to open jobs database")?;
            db.migrate().await?;
            db.insert_postings(&postings).await?;
            println!(
                "Imported {} postings into {}",
                postings.len(),
                output.display()
            );
        }
        Command::Generate {
            ref out_dir,
            count,
            seed,
        } => {
            let postings = SyntheticProvider::new(seed, count).generate();
            let written = csv::export_csv(&postings, out_dir)
                .context("Failed to write synthetic CSV files")?;
            println!("Wrote {} postings across {} files:", postings.len(), written.len());
            for path in written {
                println!("  {}", path.display());
            }
        }
    }
    Ok(())
}

/// Load the posting set from the provider selected by the CLI flags and
/// report which provider produced it.
async fn load_postings(cli: &Cli) -> Result<(Vec<JobPosting>, &'static str)> {
    if cli.synthetic {
        let provider = SyntheticProvider::default();
        let postings = provider.load().await?;
        info!("Loaded {} postings from provider '{}'", postings.len(), provider.name());
        return Ok((postings, provider.name()));
    }

    if let Some(database) = &cli.database {
        let provider = SqliteProvider::connect(database).await?;
        provider.migrate().await?;
        let postings = provider.load().await?;
        info!("Loaded {} postings from provider '{}'", postings.len(), provider.name());
        return Ok((postings, provider.name()));
    }

    let provider = CsvProvider::new(&cli.data_dir);
    let postings = provider.load().await?;
    info!("Loaded {} postings from provider '{}'", postings.len(), provider.name());
    Ok((postings, provider.name()))
}

fn print_stats(postings: &[JobPosting], provider: &str) {
    let metrics = dataset_metrics(postings);
    println!("Dataset ({} provider)", provider);
    println!("  total postings:   {}", metrics.total_jobs);
    println!(
        "  hiring:           {} ({:.1}%)",
        metrics.hiring_count, metrics.hiring_percentage
    );
    println!(
        "  partner postings: {} ({:.1}%)",
        metrics.partner_count, metrics.partner_percentage
    );
    println!("  unique companies: {}", metrics.unique_companies);
    println!("  avg join reward:  {:.0}", metrics.avg_reward);

    println!("By category:");
    for (category, count) in count_by_category(postings) {
        println!("{:>5}  {}", count, category);
    }
    println!("By region:");
    for (region, count) in count_by_region(postings) {
        println!("{:>5}  {}", count, region);
    }
}

fn print_matches(
    engine: &MatchingEngine,
    postings: &[JobPosting],
    profile: &CandidateProfile,
    provider: &str,
    json: bool,
) -> Result<()> {
    let ranked = engine.rank(postings, profile);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    let growth = engine.score_growth_potential(profile);
    println!(
        "Growth potential: {:.0}/100 ({})",
        growth.score,
        if growth.factors.is_empty() {
            "no signals".to_string()
        } else {
            growth.factors.join(", ")
        }
    );
    println!(
        "{} of {} postings above threshold (provider: {})",
        ranked.len(),
        postings.len(),
        provider
    );

    for (rank, result) in ranked.iter().take(engine.config().top_k).enumerate() {
        println!(
            "#{} [{:.1}%] {} - {} (success {:.1}%, confidence {:.0}%)",
            rank + 1,
            result.skill_match.score,
            result.company_name,
            result.title,
            result.probability,
            result.confidence
        );
        if !result.skill_match.matched.is_empty() {
            let matched: Vec<&str> = result.skill_match.matched.iter().map(String::as_str).collect();
            println!("    matched: {}", matched.join(", "));
        }
        if !result.skill_match.missing.is_empty() {
            let missing: Vec<&str> = result.skill_match.missing.iter().map(String::as_str).collect();
            println!("    missing: {}", missing.join(", "));
        }
        if result.join_reward > 0 {
            println!("    join reward: {}", result.join_reward);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_flag_parses_known_codes() {
        let cli = Cli::try_parse_from(["jobsense", "stats", "--status", "hiring"]).unwrap();
        let Command::Stats { filters } = cli.command else {
            panic!("expected stats command");
        };
        assert_eq!(filters.status, Some(StatusCode::Hiring));
        assert_eq!(filters.to_spec().status, Some(StatusCode::Hiring));
    }

    #[test]
    fn test_status_flag_rejects_unknown_codes() {
        let result = Cli::try_parse_from(["jobsense", "stats", "--status", "HIRNG"]);
        assert!(result.is_err());
    }
}
