//! Grouping and distributions over enriched candidates

use crate::processing::candidate::EnrichedCandidate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_TOP_N: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleShare {
    pub role: String,
    pub count: usize,
    pub percentage: f64,
}

/// Top `n` candidates per assigned role, highest score first.
///
/// Equal scores keep their input order. Roles nobody was assigned to are
/// absent; with `n == 0` every present role maps to an empty list.
pub fn top_per_role(
    candidates: &[EnrichedCandidate],
    n: usize,
) -> BTreeMap<String, Vec<EnrichedCandidate>> {
    let mut groups: BTreeMap<String, Vec<&EnrichedCandidate>> = BTreeMap::new();
    for candidate in candidates {
        groups
            .entry(candidate.assigned_role.clone())
            .or_default()
            .push(candidate);
    }

    groups
        .into_iter()
        .map(|(role, mut group)| {
            // sort_by is stable
            group.sort_by(|a, b| b.suitability_score.total_cmp(&a.suitability_score));
            let top = group.into_iter().take(n).cloned().collect();
            (role, top)
        })
        .collect()
}

/// Most frequent skills across all candidates, at most `limit` entries.
/// Ties are ordered by first appearance.
pub fn skill_distribution(candidates: &[EnrichedCandidate], limit: usize) -> Vec<SkillCount> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for candidate in candidates {
        for skill in candidate.record.skill_list() {
            let count = counts.entry(skill.clone()).or_insert(0);
            if *count == 0 {
                order.push(skill);
            }
            *count += 1;
        }
    }

    let mut distribution: Vec<SkillCount> = order
        .into_iter()
        .map(|skill| {
            let count = counts[&skill];
            SkillCount { skill, count }
        })
        .collect();
    distribution.sort_by(|a, b| b.count.cmp(&a.count));
    distribution.truncate(limit);
    distribution
}

/// Candidate count and share per assigned role, largest first.
pub fn role_distribution(candidates: &[EnrichedCandidate]) -> Vec<RoleShare> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for candidate in candidates {
        *counts.entry(candidate.assigned_role.as_str()).or_insert(0) += 1;
    }

    let total = candidates.len() as f64;
    let mut shares: Vec<RoleShare> = counts
        .into_iter()
        .map(|(role, count)| RoleShare {
            role: role.to_string(),
            count,
            percentage: count as f64 / total * 100.0,
        })
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

pub fn average_score(candidates: &[EnrichedCandidate]) -> Option<f64> {
    if candidates.is_empty() {
        return None;
    }
    let sum: f64 = candidates.iter().map(|c| c.suitability_score).sum();
    Some(sum / candidates.len() as f64)
}

pub fn unique_roles(candidates: &[EnrichedCandidate]) -> usize {
    candidates
        .iter()
        .map(|c| c.assigned_role.as_str())
        .collect::<std::collections::HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::candidate::CandidateRecord;

    fn candidate(name: &str, skills: &str, role: &str, score: f64) -> EnrichedCandidate {
        EnrichedCandidate {
            record: CandidateRecord::new(name, skills, "5", role, 50_000.0),
            assigned_role: role.to_string(),
            market_salary: Some(60_000.0),
            salary_comparison: Some(-10_000.0),
            suitability_score: score,
        }
    }

    fn names(list: &[EnrichedCandidate]) -> Vec<&str> {
        list.iter().map(|c| c.name()).collect()
    }

    #[test]
    fn test_top_per_role_split_three_two() {
        let candidates = vec![
            candidate("a", "Excel", "Business Analyst", 60.0),
            candidate("b", "Python", "Data Scientist", 80.0),
            candidate("c", "Excel", "Business Analyst", 90.0),
            candidate("d", "Python", "Data Scientist", 85.0),
            candidate("e", "Excel", "Business Analyst", 75.0),
        ];

        let top = top_per_role(&candidates, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(names(&top["Business Analyst"]), vec!["c", "e"]);
        assert_eq!(names(&top["Data Scientist"]), vec!["d", "b"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let candidates = vec![
            candidate("first", "Excel", "Business Analyst", 70.0),
            candidate("second", "Excel", "Business Analyst", 70.0),
            candidate("best", "Excel", "Business Analyst", 71.0),
        ];
        let top = top_per_role(&candidates, DEFAULT_TOP_N);
        assert_eq!(names(&top["Business Analyst"]), vec!["best", "first", "second"]);
    }

    #[test]
    fn test_zero_n_and_empty_input() {
        let candidates = vec![candidate("a", "Excel", "Business Analyst", 60.0)];
        let top = top_per_role(&candidates, 0);
        assert!(top["Business Analyst"].is_empty());
        assert!(top_per_role(&[], 3).is_empty());
    }

    #[test]
    fn test_skill_distribution() {
        let candidates = vec![
            candidate("a", "Excel, Reporting", "Business Analyst", 60.0),
            candidate("b", "Python,Excel", "Data Scientist", 80.0),
            candidate("c", "SQL,Python,Excel", "Data Scientist", 80.0),
        ];

        let distribution = skill_distribution(&candidates, 3);
        assert_eq!(distribution.len(), 3);
        assert_eq!(distribution[0], SkillCount { skill: "Excel".to_string(), count: 3 });
        assert_eq!(distribution[1].skill, "Python");
        assert_eq!(distribution[2].skill, "Reporting");
    }

    #[test]
    fn test_role_distribution_and_metrics() {
        let candidates = vec![
            candidate("a", "Excel", "Business Analyst", 60.0),
            candidate("b", "Python", "Data Scientist", 80.0),
            candidate("c", "Excel", "Business Analyst", 100.0),
            candidate("d", "Excel", "Business Analyst", 40.0),
        ];

        let shares = role_distribution(&candidates);
        assert_eq!(shares[0].role, "Business Analyst");
        assert_eq!(shares[0].count, 3);
        assert_eq!(shares[0].percentage, 75.0);
        assert_eq!(unique_roles(&candidates), 2);
        assert_eq!(average_score(&candidates), Some(70.0));
        assert_eq!(average_score(&[]), None);
    }
}
