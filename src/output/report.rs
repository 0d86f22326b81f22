//! Report structures assembled from an analysis run

use crate::input::loader::{DatasetSource, SchemaKind};
use crate::processing::aggregator::{
    average_score, role_distribution, skill_distribution, top_per_role, unique_roles, RoleShare,
    SkillCount,
};
use crate::processing::analyzer::{AnalysisBatch, RecordFailure};
use crate::processing::candidate::EnrichedCandidate;
use crate::processing::filters::{CandidateFilter, FilterCriteria};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything a formatter needs to render one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkforceReport {
    /// Headline metrics over every analyzed candidate
    pub summary: DashboardSummary,

    /// Candidates passing the active filters, in input order
    pub candidates: Vec<EnrichedCandidate>,

    /// Best filtered candidates per assigned role
    pub top_candidates: BTreeMap<String, Vec<EnrichedCandidate>>,

    /// Series for the skill, salary and role charts
    pub charts: ChartData,

    /// Rows that could not be analyzed
    pub failures: Vec<RecordFailure>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_candidates: usize,
    pub unique_roles: usize,
    pub average_score: Option<f64>,
    pub matching_candidates: usize,
    pub failed_records: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub skill_distribution: Vec<SkillCount>,
    pub salary_vs_score: Vec<SalaryScorePoint>,
    pub role_distribution: Vec<RoleShare>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryScorePoint {
    pub name: String,
    pub expected_salary: f64,
    pub suitability_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub schema: SchemaKind,
    pub synthetic_ratings: bool,
    pub filters: FilterCriteria,
    pub top_n: usize,
    pub version: String,
}

/// Options that shape a report but are not part of the analysis.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub top_n: usize,
    pub skill_chart_limit: usize,
}

impl WorkforceReport {
    pub fn build(
        source: &DatasetSource,
        batch: &AnalysisBatch,
        filter: &CandidateFilter,
        options: ReportOptions,
    ) -> Self {
        let all = &batch.candidates;
        let candidates = filter.apply(all);

        let summary = DashboardSummary {
            total_candidates: all.len(),
            unique_roles: unique_roles(all),
            average_score: average_score(all),
            matching_candidates: candidates.len(),
            failed_records: batch.failures.len(),
        };

        let charts = ChartData {
            skill_distribution: skill_distribution(&candidates, options.skill_chart_limit),
            salary_vs_score: candidates
                .iter()
                .map(|c| SalaryScorePoint {
                    name: c.name().to_string(),
                    expected_salary: c.expected_salary(),
                    suitability_score: c.suitability_score,
                })
                .collect(),
            role_distribution: role_distribution(&candidates),
        };

        let top_candidates = top_per_role(&candidates, options.top_n);

        Self {
            summary,
            candidates,
            top_candidates,
            charts,
            failures: batch.failures.clone(),
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                source: source.origin.clone(),
                schema: source.schema,
                synthetic_ratings: source.synthetic_ratings,
                filters: filter.criteria().clone(),
                top_n: options.top_n,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    pub fn has_candidates(&self) -> bool {
        !self.candidates.is_empty()
    }

    /// One-line description of the active filters.
    pub fn filter_description(&self) -> String {
        let filters = &self.metadata.filters;
        let mut parts = Vec::new();
        if let Some(skill) = filters.skill.as_deref().filter(|s| !s.is_empty()) {
            parts.push(format!("skill contains '{}'", skill));
        }
        match (filters.min_salary, filters.max_salary) {
            (Some(min), Some(max)) => parts.push(format!("salary {:.0}-{:.0}", min, max)),
            (Some(min), None) => parts.push(format!("salary >= {:.0}", min)),
            (None, Some(max)) => parts.push(format!("salary <= {:.0}", max)),
            (None, None) => {}
        }
        if let Some(role) = filters.role.as_deref().filter(|s| !s.is_empty()) {
            parts.push(format!("role = '{}'", role));
        }

        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(", ")
        }
    }
}
