//! Candidate records as ingested and as enriched by the analyzer

use serde::{Deserialize, Serialize};

/// Column names every candidate dataset must provide.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "Name",
    "Skills",
    "Skill Ratings",
    "Preferred Job Role",
    "Expected Salary",
];

/// One input row. Skills and ratings keep their delimited form so filters and
/// exports see exactly what was ingested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Skills")]
    pub skills: String,

    #[serde(rename = "Skill Ratings")]
    pub skill_ratings: String,

    #[serde(rename = "Preferred Job Role")]
    pub preferred_role: String,

    #[serde(rename = "Expected Salary")]
    pub expected_salary: f64,
}

/// A candidate record plus the four fields produced by analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedCandidate {
    #[serde(flatten)]
    pub record: CandidateRecord,

    #[serde(rename = "Assigned Role")]
    pub assigned_role: String,

    /// `None` when the assigned role has no market rate.
    #[serde(rename = "Market Salary")]
    pub market_salary: Option<f64>,

    /// Expected minus market salary.
    #[serde(rename = "Salary Comparison")]
    pub salary_comparison: Option<f64>,

    #[serde(rename = "Suitability Score")]
    pub suitability_score: f64,
}

impl CandidateRecord {
    pub fn new(
        name: &str,
        skills: &str,
        skill_ratings: &str,
        preferred_role: &str,
        expected_salary: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            skills: skills.to_string(),
            skill_ratings: skill_ratings.to_string(),
            preferred_role: preferred_role.to_string(),
            expected_salary,
        }
    }

    /// Skills of an already validated record; empty when the field is malformed.
    pub fn skill_list(&self) -> Vec<String> {
        parse_skills(&self.skills).unwrap_or_default()
    }
}

impl EnrichedCandidate {
    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn expected_salary(&self) -> f64 {
        self.record.expected_salary
    }
}

/// Split a comma-separated skill list, trimming each entry.
///
/// Every position must hold a skill so that it lines up with its rating.
pub fn parse_skills(raw: &str) -> std::result::Result<Vec<String>, String> {
    if raw.trim().is_empty() {
        return Err("skills are empty".to_string());
    }

    raw.split(',')
        .enumerate()
        .map(|(index, token)| {
            let token = token.trim();
            if token.is_empty() {
                Err(format!("skill {} is blank", index + 1))
            } else {
                Ok(token.to_string())
            }
        })
        .collect()
}

/// Parse comma-separated ratings, each of which must be an integer in `1..=max_rating`.
pub fn parse_ratings(raw: &str, max_rating: u8) -> std::result::Result<Vec<u8>, String> {
    if raw.trim().is_empty() {
        return Err("skill ratings are empty".to_string());
    }

    raw.split(',')
        .map(|token| {
            let token = token.trim();
            let value: i64 = token
                .parse()
                .map_err(|_| format!("skill rating '{}' is not an integer", token))?;
            if value < 1 || value > i64::from(max_rating) {
                return Err(format!(
                    "skill rating {} is outside 1-{}",
                    value, max_rating
                ));
            }
            Ok(value as u8)
        })
        .collect()
}
