//! Integration tests for the workforce analyzer

use std::path::Path;
use tempfile::TempDir;
use workforce_analyzer::config::{Config, OutputFormat};
use workforce_analyzer::input::loader::{DatasetLoader, SchemaKind};
use workforce_analyzer::output::formatter::{save_report_to_file, ReportGenerator};
use workforce_analyzer::output::report::{ReportOptions, WorkforceReport};
use workforce_analyzer::processing::aggregator::top_per_role;
use workforce_analyzer::processing::analyzer::{AnalysisBatch, CandidateAnalyzer};
use workforce_analyzer::processing::filters::{CandidateFilter, FilterCriteria};
use workforce_analyzer::WorkforceError;

fn analyze_fixture(name: &str) -> (workforce_analyzer::input::loader::DatasetSource, AnalysisBatch) {
    let dataset = DatasetLoader::new(42)
        .load(&Path::new("tests/fixtures").join(name))
        .unwrap();
    let batch = CandidateAnalyzer::from_config(&Config::default())
        .unwrap()
        .analyze(&dataset.records);
    (dataset.source, batch)
}

fn score_of(batch: &AnalysisBatch, name: &str) -> f64 {
    batch
        .candidates
        .iter()
        .find(|c| c.name() == name)
        .map(|c| c.suitability_score)
        .unwrap()
}

fn report(criteria: FilterCriteria, top_n: usize) -> WorkforceReport {
    let (source, batch) = analyze_fixture("candidates.csv");
    WorkforceReport::build(
        &source,
        &batch,
        &CandidateFilter::new(criteria).unwrap(),
        ReportOptions {
            top_n,
            skill_chart_limit: 10,
        },
    )
}

#[test]
fn test_candidate_csv_pipeline() {
    let (source, batch) = analyze_fixture("candidates.csv");

    assert_eq!(source.schema, SchemaKind::Candidate);
    assert_eq!(batch.candidates.len(), 7);
    assert_eq!(batch.failures.len(), 1);
    assert_eq!(batch.failures[0].name, "Grace");
    assert_eq!(batch.failures[0].row, 7);

    assert_eq!(score_of(&batch, "Alice"), 100.0);
    assert_eq!(score_of(&batch, "Bob"), 79.0);
    assert_eq!(score_of(&batch, "Carol"), 80.0);
    assert_eq!(score_of(&batch, "Dave"), 72.0);
    assert_eq!(score_of(&batch, "Erin"), 84.33);
    assert_eq!(score_of(&batch, "Frank"), 35.0);
    assert_eq!(score_of(&batch, "Heidi"), 91.75);
}

#[test]
fn test_role_assignment_and_market_comparison() {
    let (_, batch) = analyze_fixture("candidates.csv");
    let bob = batch.candidates.iter().find(|c| c.name() == "Bob").unwrap();
    let erin = batch.candidates.iter().find(|c| c.name() == "Erin").unwrap();

    assert_eq!(bob.assigned_role, "Software Engineer");
    assert_eq!(bob.market_salary, Some(110_000.0));
    assert_eq!(bob.salary_comparison, Some(-11_000.0));
    assert_eq!(erin.assigned_role, "Business Analyst");
}

#[test]
fn test_top_candidates_per_role() {
    let (_, batch) = analyze_fixture("candidates.csv");
    let top = top_per_role(&batch.candidates, 2);

    let names: Vec<&str> = top["Data Scientist"].iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Alice", "Heidi"]);
    assert_eq!(top["Product Manager"].len(), 1);
    assert_eq!(top.len(), 5);
}

#[test]
fn test_strict_mode_rejects_dataset() {
    let (_, batch) = analyze_fixture("candidates.csv");
    match batch.into_strict() {
        Err(WorkforceError::MalformedRecord { row, name, .. }) => {
            assert_eq!(row, 7);
            assert_eq!(name, "Grace");
        }
        other => panic!("expected malformed record, got {:?}", other.map(|c| c.len())),
    }
}

#[test]
fn test_filters_narrow_views_but_not_metrics() {
    let by_skill = report(
        FilterCriteria {
            skill: Some("PYTHON".to_string()),
            ..Default::default()
        },
        3,
    );
    assert_eq!(by_skill.summary.total_candidates, 7);
    assert_eq!(by_skill.summary.unique_roles, 5);
    assert_eq!(by_skill.summary.matching_candidates, 3);

    let by_salary = report(
        FilterCriteria {
            min_salary: Some(90_000.0),
            max_salary: Some(120_000.0),
            ..Default::default()
        },
        3,
    );
    let names: Vec<&str> = by_salary.candidates.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Erin"]);

    let by_role = report(
        FilterCriteria {
            role: Some("Software Engineer".to_string()),
            ..Default::default()
        },
        3,
    );
    assert_eq!(by_role.candidates.len(), 1);
    assert_eq!(by_role.candidates[0].name(), "Bob");
}

#[test]
fn test_average_score_over_all_candidates() {
    let report = report(FilterCriteria::default(), 3);
    let average = report.summary.average_score.unwrap();
    assert!((average - 542.08 / 7.0).abs() < 1e-6);
}

#[test]
fn test_hr_attrition_dataset_is_adapted() {
    let (source, batch) = analyze_fixture("hr_attrition.csv");

    assert_eq!(source.schema, SchemaKind::HrAttrition);
    assert!(source.synthetic_ratings);
    assert_eq!(batch.candidates.len(), 4);
    assert!(batch.failures.is_empty());

    let first = &batch.candidates[0];
    assert_eq!(first.name(), "1");
    assert_eq!(first.record.skills, "Sales Executive,Yes,Life Sciences");
    assert_eq!(first.expected_salary(), 71_916.0);
    // None of the HR job roles share a skill with the role table
    assert_eq!(first.assigned_role, "Data Scientist");
    assert!(batch
        .candidates
        .iter()
        .all(|c| (0.0..=100.0).contains(&c.suitability_score)));
}

#[test]
fn test_hr_attrition_ratings_are_reproducible() {
    let a = DatasetLoader::new(7).load(Path::new("tests/fixtures/hr_attrition.csv")).unwrap();
    let b = DatasetLoader::new(7).load(Path::new("tests/fixtures/hr_attrition.csv")).unwrap();
    assert_eq!(a.records, b.records);
}

#[test]
fn test_json_dataset() {
    let (source, batch) = analyze_fixture("candidates.json");
    assert_eq!(source.schema, SchemaKind::Candidate);
    assert_eq!(score_of(&batch, "Alice"), 100.0);
    assert_eq!(score_of(&batch, "Dave"), 72.0);
}

#[test]
fn test_unsupported_file_type() {
    let result = DatasetLoader::new(42).load(Path::new("tests/fixtures/unsupported.xyz"));
    assert!(matches!(result, Err(WorkforceError::UnsupportedFormat(_))));

    let dir = TempDir::new().unwrap();
    let bare = dir.path().join("candidates");
    std::fs::write(&bare, "Name\n").unwrap();
    match DatasetLoader::new(42).load(&bare) {
        Err(WorkforceError::InvalidInput(message)) => assert!(message.contains("no extension")),
        other => panic!("expected invalid input, got {:?}", other.map(|d| d.records.len())),
    }

    let missing = DatasetLoader::new(42).load(Path::new("tests/fixtures/missing.csv"));
    assert!(matches!(missing, Err(WorkforceError::InvalidInput(_))));
}

#[test]
fn test_missing_columns_are_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.csv");
    std::fs::write(&path, "Name,Skills,Expected Salary\nAda,Python,100000\n").unwrap();

    match DatasetLoader::new(42).load(&path) {
        Err(WorkforceError::Schema(message)) => {
            assert!(message.contains("Skill Ratings"));
            assert!(message.contains("Preferred Job Role"));
        }
        other => panic!("expected schema error, got {:?}", other.map(|d| d.records.len())),
    }
}

#[test]
fn test_every_format_renders_and_saves() {
    let report = report(FilterCriteria::default(), 3);
    let generator = ReportGenerator::with_options(false, true, true);
    let dir = TempDir::new().unwrap();

    for (format, marker) in [
        (OutputFormat::Console, "WORKFORCE ANALYSIS"),
        (OutputFormat::Json, "\"top_candidates\""),
        (OutputFormat::Markdown, "# Workforce Analysis Report"),
        (OutputFormat::Html, "<svg"),
        (OutputFormat::Csv, "Suitability Score"),
    ] {
        let rendered = generator.generate_report(&report, &format).unwrap();
        assert!(rendered.contains(marker), "{:?} output is missing {}", format, marker);

        let path = dir.path().join("out").join(format!("{:?}.txt", format));
        save_report_to_file(&rendered, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), rendered);
    }
}

#[test]
fn test_custom_role_table_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::load_from(&path).unwrap();
    assert!(path.exists());
    config.set_value("market_salaries.Data Scientist", "100000").unwrap();
    config.save_to(&path).unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    let dataset = DatasetLoader::new(42)
        .load(Path::new("tests/fixtures/candidates.csv"))
        .unwrap();
    let batch = CandidateAnalyzer::from_config(&reloaded)
        .unwrap()
        .analyze(&dataset.records);

    // 20% over the lowered market salary
    assert_eq!(score_of(&batch, "Alice"), 94.0);
}
