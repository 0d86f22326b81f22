//! Candidate analysis: role assignment, market comparison and scoring per row

use crate::config::Config;
use crate::error::{Result, WorkforceError};
use crate::processing::candidate::{parse_ratings, parse_skills, CandidateRecord, EnrichedCandidate};
use crate::processing::market_salary::{MarketSalarySource, MarketSalaryTable};
use crate::processing::role_matcher::RoleMatcher;
use crate::processing::scorer::SuitabilityScorer;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Enriches candidate records using an injected role table, salary source and scorer.
pub struct CandidateAnalyzer {
    matcher: RoleMatcher,
    scorer: SuitabilityScorer,
    market: Box<dyn MarketSalarySource>,
}

/// A row that could not be analyzed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordFailure {
    /// 1-based position among the data rows.
    pub row: usize,
    pub name: String,
    pub reason: String,
}

/// Result of analyzing a whole dataset: enriched rows in input order plus
/// the rows that failed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisBatch {
    pub candidates: Vec<EnrichedCandidate>,
    pub failures: Vec<RecordFailure>,
}

impl CandidateAnalyzer {
    pub fn new(
        matcher: RoleMatcher,
        scorer: SuitabilityScorer,
        market: Box<dyn MarketSalarySource>,
    ) -> Self {
        Self {
            matcher,
            scorer,
            market,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(
            RoleMatcher::new(&config.roles)?,
            SuitabilityScorer::new(&config.scoring),
            Box::new(MarketSalaryTable::from_config(config)),
        ))
    }

    /// Analyze every record independently. A malformed row is reported in
    /// `failures` and does not affect the others.
    pub fn analyze(&self, records: &[CandidateRecord]) -> AnalysisBatch {
        let mut batch = AnalysisBatch::default();

        for (index, record) in records.iter().enumerate() {
            let row = index + 1;
            match self.enrich(row, record) {
                Ok(candidate) => batch.candidates.push(candidate),
                Err(WorkforceError::MalformedRecord { row, name, reason }) => {
                    warn!("Skipping row {} ({}): {}", row, name, reason);
                    batch.failures.push(RecordFailure { row, name, reason });
                }
                Err(e) => batch.failures.push(RecordFailure {
                    row,
                    name: record.name.clone(),
                    reason: e.to_string(),
                }),
            }
        }

        info!(
            "Analyzed {} candidates ({} failed)",
            batch.candidates.len(),
            batch.failures.len()
        );
        batch
    }

    /// Enrich one record; `row` is only used for error reporting.
    pub fn enrich(&self, row: usize, record: &CandidateRecord) -> Result<EnrichedCandidate> {
        let malformed = |reason: String| WorkforceError::MalformedRecord {
            row,
            name: record.name.clone(),
            reason,
        };

        let skills = parse_skills(&record.skills).map_err(malformed)?;
        let ratings = parse_ratings(&record.skill_ratings, self.scorer.max_rating()).map_err(malformed)?;
        if skills.len() != ratings.len() {
            return Err(malformed(format!(
                "{} skills but {} skill ratings",
                skills.len(),
                ratings.len()
            )));
        }

        let expected_salary = record.expected_salary;
        if !expected_salary.is_finite() || expected_salary < 0.0 {
            return Err(malformed(format!(
                "expected salary {} is not a non-negative number",
                expected_salary
            )));
        }

        let assigned_role = self.matcher.assign_role(&skills).to_string();
        let market_salary = self.market.market_salary(&assigned_role);
        let salary_comparison = market_salary.map(|market| expected_salary - market);
        let score = self
            .scorer
            .score(&ratings, expected_salary, market_salary)
            .map_err(|e| malformed(e.to_string()))?;

        debug!(
            "{} -> {} (skill {:.2}, salary {:.2})",
            record.name, assigned_role, score.skill_component, score.salary_component
        );

        Ok(EnrichedCandidate {
            record: record.clone(),
            assigned_role,
            market_salary,
            salary_comparison,
            suitability_score: score.total,
        })
    }

    pub fn matcher(&self) -> &RoleMatcher {
        &self.matcher
    }
}

impl AnalysisBatch {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// All-or-nothing view: the first failure becomes the error.
    pub fn into_strict(self) -> Result<Vec<EnrichedCandidate>> {
        match self.failures.into_iter().next() {
            Some(failure) => Err(WorkforceError::MalformedRecord {
                row: failure.row,
                name: failure.name,
                reason: failure.reason,
            }),
            None => Ok(self.candidates),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn analyzer() -> CandidateAnalyzer {
        CandidateAnalyzer::from_config(&Config::default()).unwrap()
    }

    #[test]
    fn test_perfect_data_scientist() {
        let record = CandidateRecord::new(
            "Ada",
            "Python,Machine Learning,Statistics,Data Analysis",
            "10,10,10,10",
            "Data Scientist",
            120_000.0,
        );
        let candidate = analyzer().enrich(1, &record).unwrap();

        assert_eq!(candidate.assigned_role, "Data Scientist");
        assert_eq!(candidate.market_salary, Some(120_000.0));
        assert_eq!(candidate.salary_comparison, Some(0.0));
        assert_eq!(candidate.suitability_score, 100.0);
        assert_eq!(candidate.record, record);
    }

    #[test]
    fn test_end_to_end_python_java() {
        let record = CandidateRecord::new("Linus", "Python, Java", "8, 6", "Data Scientist", 100_000.0);
        let candidate = analyzer().enrich(1, &record).unwrap();

        assert_eq!(candidate.assigned_role, "Software Engineer");
        assert_eq!(candidate.market_salary, Some(110_000.0));
        assert_eq!(candidate.salary_comparison, Some(-10_000.0));
        assert_eq!(candidate.suitability_score, 79.0);
    }

    #[test]
    fn test_unknown_market_salary() {
        let config = Config::default();
        let analyzer = CandidateAnalyzer::new(
            RoleMatcher::new(&config.roles).unwrap(),
            SuitabilityScorer::new(&config.scoring),
            Box::new(MarketSalaryTable::new(BTreeMap::new())),
        );
        let record = CandidateRecord::new("Grace", "Excel", "10", "Analyst", 50_000.0);
        let candidate = analyzer.enrich(1, &record).unwrap();

        assert_eq!(candidate.assigned_role, "Business Analyst");
        assert_eq!(candidate.market_salary, None);
        assert_eq!(candidate.salary_comparison, None);
        assert_eq!(candidate.suitability_score, 70.0);
    }

    #[test]
    fn test_batch_keeps_order_and_collects_failures() {
        let records = vec![
            CandidateRecord::new("A", "Excel,Reporting", "7,8", "Business Analyst", 85_000.0),
            CandidateRecord::new("B", "Python,Java", "8", "Software Engineer", 90_000.0),
            CandidateRecord::new("C", "Leadership", "nine", "Product Manager", 90_000.0),
            CandidateRecord::new("D", "", "", "Product Manager", 90_000.0),
            CandidateRecord::new("E", "Recruitment", "6", "HR Specialist", -1.0),
            CandidateRecord::new("F", "Strategy", "9", "Product Manager", 140_000.0),
        ];

        let batch = analyzer().analyze(&records);
        let names: Vec<&str> = batch.candidates.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["A", "F"]);

        let failed_rows: Vec<usize> = batch.failures.iter().map(|f| f.row).collect();
        assert_eq!(failed_rows, vec![2, 3, 4, 5]);
        assert!(batch.failures[0].reason.contains("2 skills but 1 skill ratings"));
        assert!(!batch.is_clean());
    }

    #[test]
    fn test_blank_skill_position_is_a_record_failure() {
        let records = vec![
            CandidateRecord::new("N", "Python,,Java", "8,6", "Software Engineer", 100_000.0),
            CandidateRecord::new("O", "Python,Java", "8,6", "Software Engineer", 100_000.0),
        ];

        let batch = analyzer().analyze(&records);
        assert_eq!(batch.candidates.len(), 1);
        assert_eq!(batch.candidates[0].name(), "O");
        assert_eq!(
            batch.failures,
            vec![RecordFailure {
                row: 1,
                name: "N".to_string(),
                reason: "skill 2 is blank".to_string(),
            }]
        );
    }

    #[test]
    fn test_into_strict_reports_first_failure() {
        let records = vec![
            CandidateRecord::new("A", "Excel", "7", "Business Analyst", 85_000.0),
            CandidateRecord::new("B", "Excel", "x", "Business Analyst", 85_000.0),
        ];

        match analyzer().analyze(&records).into_strict() {
            Err(WorkforceError::MalformedRecord { row, name, .. }) => {
                assert_eq!(row, 2);
                assert_eq!(name, "B");
            }
            other => panic!("expected malformed record error, got {:?}", other),
        }

        let clean = analyzer().analyze(&records[..1]).into_strict().unwrap();
        assert_eq!(clean.len(), 1);
    }
}
