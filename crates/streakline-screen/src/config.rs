//! Growth screen configuration

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScreenError};
use crate::metric::Metric;

/// Configuration for the growth screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Metrics that must all pass (default: free cash flow, net income, revenue)
    pub required_metrics: Vec<Metric>,

    /// Minimum observations per metric series (default: 3)
    pub min_observations: usize,

    /// Fraction of the series the latest value must dominate, in (0, 1] (default: 1.0)
    /// 1.0 = latest value is the series high
    /// Lower values tolerate earlier peaks
    pub min_coverage: f64,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            required_metrics: Metric::ALL.to_vec(),
            min_observations: 3,
            min_coverage: 1.0,
        }
    }
}

impl ScreenConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or the values are invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check parameter ranges.
    ///
    /// # Errors
    /// Returns [`ScreenError::InvalidConfig`] describing the first bad field.
    pub fn validate(&self) -> Result<()> {
        if self.required_metrics.is_empty() {
            return Err(ScreenError::InvalidConfig(
                "required_metrics must not be empty".to_string(),
            ));
        }
        if self.min_observations == 0 {
            return Err(ScreenError::InvalidConfig(
                "min_observations must be at least 1".to_string(),
            ));
        }
        if !(self.min_coverage > 0.0 && self.min_coverage <= 1.0) {
            return Err(ScreenError::InvalidConfig(format!(
                "min_coverage must be in (0, 1], got {}",
                self.min_coverage
            )));
        }
        Ok(())
    }
}
