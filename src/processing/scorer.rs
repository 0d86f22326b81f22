//! Suitability scoring: skill strength plus salary alignment

use crate::config::ScoringConfig;
use crate::error::{Result, WorkforceError};
use serde::{Deserialize, Serialize};

/// Weighted 0-100 score.
///
/// The skill component is the mean rating as a fraction of `max_rating`,
/// scaled to `skill_weight`. The salary component grants full
/// `salary_weight` at or below market rate and decays linearly to zero as
/// the overage reaches 100% of market. An unknown market rate earns nothing.
#[derive(Debug, Clone)]
pub struct SuitabilityScorer {
    skill_weight: f64,
    salary_weight: f64,
    max_rating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_component: f64,
    pub salary_component: f64,
    /// Rounded to two decimals.
    pub total: f64,
}

impl SuitabilityScorer {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            skill_weight: config.skill_weight,
            salary_weight: config.salary_weight,
            max_rating: config.max_rating,
        }
    }

    pub fn max_rating(&self) -> u8 {
        self.max_rating
    }

    /// `None` for an empty rating list.
    pub fn skill_component(&self, ratings: &[u8]) -> Option<f64> {
        if ratings.is_empty() {
            return None;
        }

        let sum: f64 = ratings.iter().map(|&r| f64::from(r)).sum();
        let ceiling = ratings.len() as f64 * f64::from(self.max_rating);
        Some(sum / ceiling * self.skill_weight)
    }

    pub fn salary_component(&self, expected_salary: f64, market_salary: Option<f64>) -> f64 {
        match market_salary {
            Some(market) if market > 0.0 => {
                if expected_salary <= market {
                    self.salary_weight
                } else {
                    let overage = (expected_salary - market) / market;
                    (self.salary_weight - overage * self.salary_weight).max(0.0)
                }
            }
            _ => 0.0,
        }
    }

    pub fn score(
        &self,
        ratings: &[u8],
        expected_salary: f64,
        market_salary: Option<f64>,
    ) -> Result<ScoreBreakdown> {
        let skill_component = self.skill_component(ratings).ok_or_else(|| {
            WorkforceError::InvalidInput("cannot score a candidate without skill ratings".to_string())
        })?;
        let salary_component = self.salary_component(expected_salary, market_salary);

        Ok(ScoreBreakdown {
            skill_component,
            salary_component,
            total: round2(skill_component + salary_component),
        })
    }
}

impl Default for SuitabilityScorer {
    fn default() -> Self {
        Self::new(&crate::config::Config::default().scoring)
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
