//! Configuration management for the workforce analyzer

use crate::error::{Result, WorkforceError};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub roles: Vec<RoleDefinition>,
    pub market_salaries: BTreeMap<String, f64>,
    pub scoring: ScoringConfig,
    pub analysis: AnalysisConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// A role and the skills it requires. Table order is significant: it breaks
/// ties between equally matching roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleDefinition {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub skill_weight: f64,
    pub salary_weight: f64,
    pub max_rating: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub top_n: usize,
    pub skill_chart_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub synthetic_seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
    Csv,
}

impl RoleDefinition {
    pub fn new(name: &str, skills: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let roles = vec![
            RoleDefinition::new(
                "Data Scientist",
                &["Python", "Machine Learning", "Statistics", "Data Analysis"],
            ),
            RoleDefinition::new("Software Engineer", &["Python", "Java", "C++", "Algorithms"]),
            RoleDefinition::new("Product Manager", &["Leadership", "Communication", "Strategy"]),
            RoleDefinition::new(
                "HR Specialist",
                &["Recruitment", "Onboarding", "Employee Relations"],
            ),
            RoleDefinition::new("Business Analyst", &["Excel", "Data Analysis", "Reporting"]),
        ];

        let market_salaries = [
            ("Data Scientist", 120_000.0),
            ("Software Engineer", 110_000.0),
            ("Product Manager", 130_000.0),
            ("HR Specialist", 80_000.0),
            ("Business Analyst", 90_000.0),
        ]
        .into_iter()
        .map(|(role, salary)| (role.to_string(), salary))
        .collect();

        Self {
            roles,
            market_salaries,
            scoring: ScoringConfig {
                skill_weight: 70.0,
                salary_weight: 30.0,
                max_rating: 10,
            },
            analysis: AnalysisConfig {
                top_n: 3,
                skill_chart_limit: 10,
            },
            input: InputConfig { synthetic_seed: 42 },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
                pretty_json: true,
            },
        }
    }
}

impl Config {
    /// Load the configuration from the default location, writing defaults on first run.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                WorkforceError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            WorkforceError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("workforce-analyzer")
            .join("config.toml")
    }

    /// Reject tables the scorer and matcher cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.roles.is_empty() {
            return Err(WorkforceError::Configuration(
                "Role table must contain at least one role".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for role in &self.roles {
            if !seen.insert(role.name.as_str()) {
                return Err(WorkforceError::Configuration(format!(
                    "Duplicate role in role table: {}",
                    role.name
                )));
            }
        }

        for (role, salary) in &self.market_salaries {
            if !salary.is_finite() || *salary <= 0.0 {
                return Err(WorkforceError::Configuration(format!(
                    "Market salary for '{}' must be positive, got {}",
                    role, salary
                )));
            }
        }

        let scoring = &self.scoring;
        if scoring.skill_weight < 0.0 || scoring.salary_weight < 0.0 {
            return Err(WorkforceError::Configuration(
                "Scoring weights must not be negative".to_string(),
            ));
        }
        if (scoring.skill_weight + scoring.salary_weight - 100.0).abs() > 1e-9 {
            return Err(WorkforceError::Configuration(format!(
                "Scoring weights must sum to 100, got {} + {}",
                scoring.skill_weight, scoring.salary_weight
            )));
        }
        if scoring.max_rating == 0 {
            return Err(WorkforceError::Configuration(
                "scoring.max_rating must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Set a scalar value by dotted key, e.g. `analysis.top_n`.
    ///
    /// Setting one scoring weight moves the other so the pair still sums to 100.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "scoring.skill_weight" => {
                self.scoring.skill_weight = value.parse::<f64>().context("expected a number")?;
                self.scoring.salary_weight = 100.0 - self.scoring.skill_weight;
            }
            "scoring.salary_weight" => {
                self.scoring.salary_weight = value.parse::<f64>().context("expected a number")?;
                self.scoring.skill_weight = 100.0 - self.scoring.salary_weight;
            }
            "scoring.max_rating" => {
                self.scoring.max_rating = value.parse::<u8>().context("expected an integer 1-255")?;
            }
            "analysis.top_n" => {
                self.analysis.top_n = value.parse::<usize>().context("expected a non-negative integer")?;
            }
            "analysis.skill_chart_limit" => {
                self.analysis.skill_chart_limit =
                    value.parse::<usize>().context("expected a non-negative integer")?;
            }
            "input.synthetic_seed" => {
                self.input.synthetic_seed = value.parse::<u64>().context("expected an unsigned integer")?;
            }
            "output.format" => {
                self.output.format =
                    crate::cli::parse_output_format(value).map_err(WorkforceError::InvalidInput)?;
            }
            "output.detailed" => {
                self.output.detailed = value.parse::<bool>().context("expected true or false")?;
            }
            "output.color_output" => {
                self.output.color_output = value.parse::<bool>().context("expected true or false")?;
            }
            "output.pretty_json" => {
                self.output.pretty_json = value.parse::<bool>().context("expected true or false")?;
            }
            key if key.starts_with("market_salaries.") => {
                let role = &key["market_salaries.".len()..];
                let salary = value.parse::<f64>().context("expected a number")?;
                self.market_salaries.insert(role.to_string(), salary);
            }
            _ => {
                return Err(WorkforceError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        self.validate()
    }

    pub fn role_names(&self) -> Vec<&str> {
        self.roles.iter().map(|r| r.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.roles.len(), 5);
        assert_eq!(config.roles[0].name, "Data Scientist");
        assert_eq!(config.market_salaries.get("HR Specialist"), Some(&80_000.0));
    }

    #[test]
    fn test_round_trip_through_file_keeps_role_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        // first load writes defaults
        let written = Config::load_from(&path).unwrap();
        assert!(path.exists());

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.role_names(), written.role_names());
        assert_eq!(loaded.scoring.max_rating, 10);
    }

    #[test]
    fn test_rejects_bad_weights() {
        let mut config = Config::default();
        config.scoring.skill_weight = 80.0;
        assert!(matches!(
            config.validate(),
            Err(WorkforceError::Configuration(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_market_salary() {
        let mut config = Config::default();
        config.market_salaries.insert("Intern".to_string(), 0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_and_duplicate_roles() {
        let mut config = Config::default();
        config.roles.clear();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.roles.push(RoleDefinition::new("Data Scientist", &["R"]));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_set_value() {
        let mut config = Config::default();
        config.set_value("analysis.top_n", "5").unwrap();
        assert_eq!(config.analysis.top_n, 5);

        config.set_value("market_salaries.Data Scientist", "125000").unwrap();
        assert_eq!(config.market_salaries["Data Scientist"], 125_000.0);

        config.set_value("scoring.skill_weight", "60").unwrap();
        assert_eq!(config.scoring.salary_weight, 40.0);

        config.set_value("output.format", "md").unwrap();
        assert_eq!(config.output.format, OutputFormat::Markdown);

        assert!(config.set_value("analysis.top_n", "many").is_err());
        assert!(config.set_value("nope.key", "1").is_err());
    }
}
