//! Row selection over enriched candidates

use crate::error::{Result, WorkforceError};
use crate::processing::candidate::EnrichedCandidate;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

/// Minimum similarity for suggesting a role name.
const ROLE_SUGGESTION_THRESHOLD: f64 = 0.8;

/// Filter parameters. `None` (or an empty string) disables a criterion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub skill: Option<String>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub role: Option<String>,
}

/// Compiled form of [`FilterCriteria`].
pub struct CandidateFilter {
    criteria: FilterCriteria,
    skill_matcher: Option<Regex>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.skill().is_none()
            && self.min_salary.is_none()
            && self.max_salary.is_none()
            && self.role().is_none()
    }

    fn skill(&self) -> Option<&str> {
        self.skill.as_deref().filter(|s| !s.is_empty())
    }

    fn role(&self) -> Option<&str> {
        self.role.as_deref().filter(|s| !s.is_empty())
    }
}

impl CandidateFilter {
    pub fn new(criteria: FilterCriteria) -> Result<Self> {
        if let (Some(min), Some(max)) = (criteria.min_salary, criteria.max_salary) {
            if min > max {
                return Err(WorkforceError::InvalidInput(format!(
                    "Minimum salary {} is greater than maximum salary {}",
                    min, max
                )));
            }
        }

        let skill_matcher = match criteria.skill() {
            Some(skill) => Some(
                RegexBuilder::new(&regex::escape(skill))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| {
                        WorkforceError::InvalidInput(format!("Invalid skill filter '{}': {}", skill, e))
                    })?,
            ),
            None => None,
        };

        Ok(Self {
            criteria,
            skill_matcher,
        })
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Case-insensitive (Unicode) substring match on the raw skills field.
    pub fn matches_skill(&self, candidate: &EnrichedCandidate) -> bool {
        match &self.skill_matcher {
            Some(matcher) => matcher.is_match(&candidate.record.skills),
            None => true,
        }
    }

    /// Inclusive bounds on expected salary.
    pub fn matches_salary(&self, candidate: &EnrichedCandidate) -> bool {
        let salary = candidate.expected_salary();
        self.criteria.min_salary.map_or(true, |min| salary >= min)
            && self.criteria.max_salary.map_or(true, |max| salary <= max)
    }

    /// Exact match against the assigned or the preferred role.
    pub fn matches_role(&self, candidate: &EnrichedCandidate) -> bool {
        match self.criteria.role() {
            Some(role) => candidate.assigned_role == role || candidate.record.preferred_role == role,
            None => true,
        }
    }

    pub fn matches(&self, candidate: &EnrichedCandidate) -> bool {
        self.matches_skill(candidate) && self.matches_salary(candidate) && self.matches_role(candidate)
    }

    pub fn apply(&self, candidates: &[EnrichedCandidate]) -> Vec<EnrichedCandidate> {
        candidates
            .iter()
            .filter(|c| self.matches(c))
            .cloned()
            .collect()
    }
}

/// Closest known role name to `role`, if any is similar enough.
pub fn suggest_role<'a>(role: &str, known: &[&'a str]) -> Option<&'a str> {
    let wanted = role.to_lowercase();
    known
        .iter()
        .map(|candidate| (*candidate, jaro_winkler(&wanted, &candidate.to_lowercase())))
        .filter(|(_, similarity)| *similarity >= ROLE_SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(candidate, _)| candidate)
}
