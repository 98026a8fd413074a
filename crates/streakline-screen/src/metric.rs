//! Fundamental metrics and per-company series.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Fundamental series checked by the growth screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Operating cash flow minus capital expenditure
    FreeCashFlow,
    /// Bottom-line earnings
    NetIncome,
    /// Total revenue
    Revenue,
}

impl Metric {
    /// Every metric, in reporting order
    pub const ALL: [Self; 3] = [Self::FreeCashFlow, Self::NetIncome, Self::Revenue];

    /// Identifier used in configuration files
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FreeCashFlow => "free_cash_flow",
            Self::NetIncome => "net_income",
            Self::Revenue => "revenue",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fundamental series for one company, oldest observation first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinancialHistory {
    series: HashMap<Metric, Vec<f64>>,
}

impl FinancialHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, metric: Metric, values: impl Into<Vec<f64>>) -> Self {
        self.insert(metric, values);
        self
    }

    /// Set the series for `metric`, returning the previous one
    pub fn insert(&mut self, metric: Metric, values: impl Into<Vec<f64>>) -> Option<Vec<f64>> {
        self.series.insert(metric, values.into())
    }

    /// Series for `metric`, if supplied
    pub fn get(&self, metric: Metric) -> Option<&[f64]> {
        self.series.get(&metric).map(Vec::as_slice)
    }

    /// Metrics with a supplied series, sorted
    pub fn metrics(&self) -> Vec<Metric> {
        let mut metrics: Vec<Metric> = self.series.keys().copied().collect();
        metrics.sort_unstable();
        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_serde_names() {
        let json = serde_json::to_string(&Metric::FreeCashFlow).unwrap();
        assert_eq!(json, "\"free_cash_flow\"");
        for metric in Metric::ALL {
            let parsed: Metric = serde_json::from_str(&format!("\"{metric}\"")).unwrap();
            assert_eq!(parsed, metric);
        }
    }

    #[test]
    fn test_history_from_json() {
        let history: FinancialHistory =
            serde_json::from_str(r#"{"revenue": [1.0, 2.0], "net_income": [0.5]}"#).unwrap();
        assert_eq!(history.get(Metric::Revenue), Some(&[1.0, 2.0][..]));
        assert_eq!(history.get(Metric::FreeCashFlow), None);
        assert_eq!(history.metrics(), vec![Metric::NetIncome, Metric::Revenue]);
    }
}
