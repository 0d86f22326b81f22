//! Property-based tests for scoring, role assignment and aggregation
//!
//! These tests check the invariants that must hold for any input using proptest.

use proptest::prelude::*;
use workforce_analyzer::config::Config;
use workforce_analyzer::processing::aggregator::top_per_role;
use workforce_analyzer::processing::analyzer::CandidateAnalyzer;
use workforce_analyzer::processing::candidate::CandidateRecord;
use workforce_analyzer::processing::role_matcher::RoleMatcher;
use workforce_analyzer::processing::scorer::SuitabilityScorer;

const SKILL_POOL: [&str; 12] = [
    "Python",
    "Java",
    "C++",
    "Algorithms",
    "Machine Learning",
    "Statistics",
    "Data Analysis",
    "Leadership",
    "Excel",
    "Reporting",
    "Recruitment",
    "Cooking",
];

fn record_strategy() -> impl Strategy<Value = CandidateRecord> {
    (
        "[A-Z][a-z]{2,8}",
        proptest::collection::vec((0..SKILL_POOL.len(), 1_u8..=10), 1..6),
        0.0_f64..400_000.0,
    )
        .prop_map(|(name, skills, salary)| {
            let names: Vec<&str> = skills.iter().map(|(i, _)| SKILL_POOL[*i]).collect();
            let ratings: Vec<String> = skills.iter().map(|(_, r)| r.to_string()).collect();
            CandidateRecord::new(&name, &names.join(","), &ratings.join(","), "Any", salary)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: the score is always within 0-100 and has at most two decimals
    #[test]
    fn prop_score_is_bounded(
        ratings in proptest::collection::vec(1_u8..=10, 1..12),
        expected in 0.0_f64..1_000_000.0,
        market in proptest::option::of(1.0_f64..500_000.0)
    ) {
        let score = SuitabilityScorer::default().score(&ratings, expected, market).unwrap();

        prop_assert!((0.0..=100.0).contains(&score.total), "score out of range: {}", score.total);
        prop_assert!(((score.total * 100.0).round() - score.total * 100.0).abs() < 1e-6);
    }

    /// Property: asking for less salary never lowers the score
    #[test]
    fn prop_lower_salary_never_scores_worse(
        ratings in proptest::collection::vec(1_u8..=10, 1..8),
        low in 0.0_f64..300_000.0,
        delta in 0.0_f64..300_000.0,
        market in 1.0_f64..300_000.0
    ) {
        let scorer = SuitabilityScorer::default();
        let cheap = scorer.score(&ratings, low, Some(market)).unwrap().total;
        let dear = scorer.score(&ratings, low + delta, Some(market)).unwrap().total;
        prop_assert!(cheap >= dear);
    }

    /// Property: the assigned role always has the maximal overlap
    #[test]
    fn prop_assigned_role_has_max_overlap(
        picks in proptest::collection::vec(0..SKILL_POOL.len(), 0..8)
    ) {
        let matcher = RoleMatcher::new(&Config::default().roles).unwrap();
        let skills: Vec<String> = picks.iter().map(|i| SKILL_POOL[*i].to_string()).collect();

        let assigned = matcher.assign_role(&skills).to_string();
        let scores = matcher.role_scores(&skills);
        let best = scores.iter().map(|s| s.overlap).max().unwrap_or(0);
        let first_best = scores.iter().find(|s| s.overlap == best).unwrap();

        prop_assert_eq!(assigned, first_best.role.clone());
    }

    /// Property: top-N lists are bounded by N, sorted descending and drawn from their role
    #[test]
    fn prop_top_n_bounded_and_sorted(
        records in proptest::collection::vec(record_strategy(), 0..40),
        n in 0_usize..6
    ) {
        let batch = CandidateAnalyzer::from_config(&Config::default())
            .unwrap()
            .analyze(&records);
        prop_assert!(batch.failures.is_empty());

        let top = top_per_role(&batch.candidates, n);
        for (role, group) in &top {
            let in_role = batch.candidates.iter().filter(|c| &c.assigned_role == role).count();
            prop_assert_eq!(group.len(), n.min(in_role));
            prop_assert!(group.iter().all(|c| &c.assigned_role == role));
            prop_assert!(group
                .windows(2)
                .all(|pair| pair[0].suitability_score >= pair[1].suitability_score));
        }
    }
}
