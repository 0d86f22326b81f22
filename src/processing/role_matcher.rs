//! Skill-overlap role assignment

use crate::config::RoleDefinition;
use crate::error::{Result, WorkforceError};
use serde::Serialize;
use std::collections::HashSet;

/// Assigns every candidate exactly one role from an ordered role table.
pub struct RoleMatcher {
    roles: Vec<(String, HashSet<String>)>,
}

/// Overlap between a candidate's skills and one role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleScore {
    pub role: String,
    pub overlap: usize,
}

impl RoleMatcher {
    /// Build a matcher; the table must not be empty.
    pub fn new(roles: &[RoleDefinition]) -> Result<Self> {
        if roles.is_empty() {
            return Err(WorkforceError::Configuration(
                "Role matcher needs at least one role".to_string(),
            ));
        }

        let roles = roles
            .iter()
            .map(|role| (role.name.clone(), role.skills.iter().cloned().collect()))
            .collect();

        Ok(Self { roles })
    }

    /// Pick the role with the largest skill overlap.
    ///
    /// Ties go to the role listed first in the table, which also means a
    /// candidate with no overlap at all gets the first role.
    pub fn assign_role(&self, skills: &[String]) -> &str {
        let candidate: HashSet<&str> = skills.iter().map(|s| s.as_str()).collect();

        let mut best = &self.roles[0].0;
        let mut best_overlap = 0;
        for (index, (role, required)) in self.roles.iter().enumerate() {
            let overlap = Self::overlap(&candidate, required);
            if index == 0 || overlap > best_overlap {
                best = role;
                best_overlap = overlap;
            }
        }

        best
    }

    /// Overlap for every role, in table order.
    pub fn role_scores(&self, skills: &[String]) -> Vec<RoleScore> {
        let candidate: HashSet<&str> = skills.iter().map(|s| s.as_str()).collect();

        self.roles
            .iter()
            .map(|(role, required)| RoleScore {
                role: role.clone(),
                overlap: Self::overlap(&candidate, required),
            })
            .collect()
    }

    fn overlap(candidate: &HashSet<&str>, required: &HashSet<String>) -> usize {
        required
            .iter()
            .filter(|skill| candidate.contains(skill.as_str()))
            .count()
    }

    /// Role names in table order.
    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(|(name, _)| name.as_str())
    }
}
