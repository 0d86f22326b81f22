//! Workforce analyzer: role matching and suitability scoring for candidate datasets

use clap::Parser;
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::process;
use workforce_analyzer::cli::{self, Cli, Commands, ConfigAction, FilterArgs};
use workforce_analyzer::config::{Config, OutputFormat};
use workforce_analyzer::input::loader::{Dataset, DatasetLoader};
use workforce_analyzer::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use workforce_analyzer::output::report::{ReportOptions, WorkforceReport};
use workforce_analyzer::processing::analyzer::{AnalysisBatch, CandidateAnalyzer};
use workforce_analyzer::processing::filters::{suggest_role, CandidateFilter};
use workforce_analyzer::{Result, WorkforceError};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, &config_path) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze {
            input,
            filters,
            top,
            output,
            save,
            detailed,
            strict,
            seed,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let report = build_report(&input, &filters, top, strict, seed, &config)?;

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                config.output.pretty_json,
            );
            let rendered = generator.generate_report(&report, &format)?;
            emit(&rendered, save, &format, &input)
        }

        Commands::Top {
            input,
            filters,
            top,
            output,
            seed,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let report = build_report(&input, &filters, top, false, seed, &config)?;

            let generator = ReportGenerator::with_options(
                config.output.color_output,
                false,
                config.output.pretty_json,
            );
            println!("{}", generator.generate_top_candidates(&report, &format)?);
            Ok(())
        }

        Commands::Roles => {
            println!("📋 Role Table\n");
            for role in &config.roles {
                let market = config
                    .market_salaries
                    .get(&role.name)
                    .map(|s| format!("{:.0}", s))
                    .unwrap_or_else(|| "unknown".to_string());
                println!("  • {} (market salary: {})", role.name, market);
                println!("    Skills: {}", role.skills.join(", "));
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Config File: {}", config_path.display());
                println!("\nScoring:");
                println!("  Skill Weight: {:.1}", config.scoring.skill_weight);
                println!("  Salary Weight: {:.1}", config.scoring.salary_weight);
                println!("  Max Rating: {}", config.scoring.max_rating);
                println!("\nAnalysis:");
                println!("  Top N per Role: {}", config.analysis.top_n);
                println!("  Skill Chart Limit: {}", config.analysis.skill_chart_limit);
                println!("\nInput:");
                println!("  Synthetic Seed: {}", config.input.synthetic_seed);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
                println!("\nRoles: {}", config.role_names().join(", "));
                Ok(())
            }
            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
                Ok(())
            }
            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset successfully!");
                Ok(())
            }
            Some(ConfigAction::Set { key, value }) => {
                println!("🔧 Setting {}: {}", key, value);
                let mut config = config;
                config.set_value(&key, &value)?;
                config.save_to(config_path)?;
                println!("✅ Configuration updated");
                Ok(())
            }
        },
    }
}

fn resolve_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(WorkforceError::InvalidInput),
        None => Ok(config.output.format),
    }
}

/// Load, analyze and filter a dataset into a report.
fn build_report(
    input: &Path,
    filters: &FilterArgs,
    top: Option<usize>,
    strict: bool,
    seed: Option<u64>,
    config: &Config,
) -> Result<WorkforceReport> {
    let filter = CandidateFilter::new(filters.to_criteria())?;
    let loader = DatasetLoader::new(seed.unwrap_or(config.input.synthetic_seed));
    let Dataset { records, source } = loader.load(input)?;

    let analyzer = CandidateAnalyzer::from_config(config)?;
    let mut batch = analyzer.analyze(&records);
    if strict {
        batch = AnalysisBatch {
            candidates: batch.into_strict()?,
            failures: Vec::new(),
        };
    }

    let options = ReportOptions {
        top_n: top.unwrap_or(config.analysis.top_n),
        skill_chart_limit: config.analysis.skill_chart_limit,
    };
    let report = WorkforceReport::build(&source, &batch, &filter, options);
    info!(
        "{} of {} candidates match the active filters",
        report.summary.matching_candidates, report.summary.total_candidates
    );

    if let Some(role) = filter.criteria().role.as_deref() {
        if !report.has_candidates() {
            let known: Vec<&str> = analyzer.matcher().role_names().collect();
            match suggest_role(role, &known) {
                Some(suggestion) => warn!("No candidates for role '{}'. Did you mean '{}'?", role, suggestion),
                None => warn!("No candidates for role '{}'", role),
            }
        }
    }

    Ok(report)
}

fn emit(rendered: &str, save: Option<PathBuf>, format: &OutputFormat, input: &Path) -> Result<()> {
    match save {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(suggest_filename(format, &input.to_string_lossy(), true))
            } else {
                path
            };
            save_report_to_file(rendered, &path)?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
