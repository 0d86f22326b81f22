//! Market salary lookup

use crate::config::Config;
use std::collections::BTreeMap;

/// Source of reference annual salaries per role.
pub trait MarketSalarySource {
    /// `None` means the rate for this role is unknown.
    fn market_salary(&self, role: &str) -> Option<f64>;
}

/// Static salary table, usually taken from the configuration.
#[derive(Debug, Clone, Default)]
pub struct MarketSalaryTable {
    salaries: BTreeMap<String, f64>,
}

impl MarketSalaryTable {
    pub fn new(salaries: BTreeMap<String, f64>) -> Self {
        Self { salaries }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.market_salaries.clone())
    }
}

impl MarketSalarySource for MarketSalaryTable {
    fn market_salary(&self, role: &str) -> Option<f64> {
        self.salaries.get(role).copied()
    }
}
