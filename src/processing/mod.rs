//! Candidate processing module
//! Role matching, scoring, analysis, aggregation and filtering

pub mod aggregator;
pub mod analyzer;
pub mod candidate;
pub mod filters;
pub mod market_salary;
pub mod role_matcher;
pub mod scorer;
