//! Adapter for the IBM HR attrition employee schema

use crate::input::synthetic::SyntheticRatingGenerator;
use crate::processing::candidate::CandidateRecord;
use serde::Deserialize;

/// Columns that identify an HR attrition export.
pub const HR_ATTRITION_FIELDS: [&str; 5] = [
    "EmployeeNumber",
    "JobRole",
    "OverTime",
    "EducationField",
    "MonthlyIncome",
];

/// The subset of an HR attrition row the adapter reads.
#[derive(Debug, Clone, Deserialize)]
pub struct HrEmployeeRecord {
    #[serde(rename = "EmployeeNumber")]
    pub employee_number: String,

    #[serde(rename = "JobRole")]
    pub job_role: String,

    #[serde(rename = "OverTime")]
    pub over_time: String,

    #[serde(rename = "EducationField")]
    pub education_field: String,

    #[serde(rename = "MonthlyIncome")]
    pub monthly_income: f64,
}

/// Turns employee rows into candidate records.
///
/// Skills are the job role, overtime flag and education field; ratings are
/// synthetic; the expected salary is twelve monthly incomes.
pub struct HrAttritionAdapter {
    generator: SyntheticRatingGenerator,
}

impl HrAttritionAdapter {
    pub fn new(generator: SyntheticRatingGenerator) -> Self {
        Self { generator }
    }

    /// True when every HR attrition column is present.
    pub fn matches<'a>(headers: impl IntoIterator<Item = &'a str>) -> bool {
        let headers: Vec<&str> = headers.into_iter().collect();
        HR_ATTRITION_FIELDS
            .iter()
            .all(|field| headers.contains(field))
    }

    pub fn transform(&mut self, rows: &[HrEmployeeRecord]) -> Vec<CandidateRecord> {
        rows.iter().map(|row| self.transform_row(row)).collect()
    }

    pub fn transform_row(&mut self, row: &HrEmployeeRecord) -> CandidateRecord {
        let fields = [
            row.job_role.as_str(),
            row.over_time.as_str(),
            row.education_field.as_str(),
        ];
        let skills = fields.join(",");
        let skill_ratings = self.generator.ratings_field(fields.len());

        CandidateRecord {
            name: row.employee_number.clone(),
            skills,
            skill_ratings,
            preferred_role: row.job_role.clone(),
            expected_salary: (row.monthly_income * 12.0).trunc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(number: &str, role: &str, income: f64) -> HrEmployeeRecord {
        HrEmployeeRecord {
            employee_number: number.to_string(),
            job_role: role.to_string(),
            over_time: "Yes".to_string(),
            education_field: "Life Sciences".to_string(),
            monthly_income: income,
        }
    }

    #[test]
    fn test_matches_schema() {
        let headers = [
            "Age",
            "EmployeeNumber",
            "JobRole",
            "OverTime",
            "EducationField",
            "MonthlyIncome",
        ];
        assert!(HrAttritionAdapter::matches(headers));
        assert!(!HrAttritionAdapter::matches(["EmployeeNumber", "JobRole"]));
    }

    #[test]
    fn test_transform_row() {
        let mut adapter = HrAttritionAdapter::new(SyntheticRatingGenerator::new(42));
        let record = adapter.transform_row(&employee("1001", "Sales Executive", 5993.5));

        assert_eq!(record.name, "1001");
        assert_eq!(record.skills, "Sales Executive,Yes,Life Sciences");
        assert_eq!(record.preferred_role, "Sales Executive");
        assert_eq!(record.expected_salary, 71_922.0);
        assert_eq!(record.skill_ratings.split(',').count(), 3);
        assert!(record
            .skill_ratings
            .split(',')
            .all(|r| (7..=10).contains(&r.parse::<u8>().unwrap())));
    }

    #[test]
    fn test_transform_is_reproducible_with_seed() {
        let rows = vec![employee("1", "Research Scientist", 3000.0), employee("2", "Manager", 9000.0)];
        let a = HrAttritionAdapter::new(SyntheticRatingGenerator::new(5)).transform(&rows);
        let b = HrAttritionAdapter::new(SyntheticRatingGenerator::new(5)).transform(&rows);
        assert_eq!(a, b);
    }
}
