//! CLI interface for the workforce analyzer

use crate::config::OutputFormat;
use crate::processing::filters::FilterCriteria;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "workforce-analyzer")]
#[command(about = "Candidate role matching and suitability scoring")]
#[command(long_about = "Assign candidates to roles by skill overlap, score their suitability against market salaries, and report the best candidates per role")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a candidate dataset and render a report
    Analyze {
        /// Path to the dataset (CSV or JSON)
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Candidates kept per role in the top view
        #[arg(short, long)]
        top: Option<usize>,

        /// Output format: console, json, markdown, html, csv
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show every row and the raw skill ratings
        #[arg(short, long)]
        detailed: bool,

        /// Abort on the first malformed record instead of skipping it
        #[arg(long)]
        strict: bool,

        /// Seed for synthetic skill ratings (HR attrition input)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show only the top candidates per role
    Top {
        /// Path to the dataset (CSV or JSON)
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Candidates kept per role
        #[arg(short, long)]
        top: Option<usize>,

        /// Output format: console or json
        #[arg(short, long)]
        output: Option<String>,

        /// Seed for synthetic skill ratings (HR attrition input)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the role table with required skills and market salaries
    Roles,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

/// Row filters shared by `analyze` and `top`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Keep candidates whose skills contain this text (case-insensitive)
    #[arg(long)]
    pub skill: Option<String>,

    /// Minimum expected salary, 0 for no bound
    #[arg(long)]
    pub min_salary: Option<f64>,

    /// Maximum expected salary, 0 for no bound
    #[arg(long)]
    pub max_salary: Option<f64>,

    /// Keep candidates assigned to or preferring this role
    #[arg(long)]
    pub role: Option<String>,
}

impl FilterArgs {
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            skill: self.skill.clone().filter(|s| !s.trim().is_empty()),
            min_salary: self.min_salary.filter(|v| *v != 0.0),
            max_salary: self.max_salary.filter(|v| *v != 0.0),
            role: self.role.clone().filter(|s| !s.trim().is_empty()),
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "scoring.skill_weight", "market_salaries.Data Scientist")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        "csv" => Ok(OutputFormat::Csv),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html, csv",
            format
        )),
    }
}
