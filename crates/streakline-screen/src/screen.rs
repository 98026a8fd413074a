//! Growth Screen
//!
//! Vets companies on whether their fundamentals are at a sustained high. Each
//! required metric series is profiled with the span trackers; a metric passes
//! when the latest value's span covers at least `min_coverage` of the series,
//! and a company passes when every required metric does.

use serde::{Deserialize, Serialize};

use crate::config::ScreenConfig;
use crate::error::{Result, ScreenError};
use crate::metric::{FinancialHistory, Metric};
use crate::profile::SpanProfile;

/// Result of screening one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricVerdict {
    /// Metric that was profiled
    pub metric: Metric,
    /// Span statistics of the series
    pub profile: SpanProfile,
    /// Whether the coverage threshold was met
    pub passed: bool,
}

/// Result of screening one company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenOutcome {
    /// Company identifier
    pub symbol: String,
    /// One verdict per required metric, in configuration order
    pub verdicts: Vec<MetricVerdict>,
    /// Whether every required metric passed
    pub passed: bool,
}

impl ScreenOutcome {
    /// Metrics that missed the threshold
    pub fn failed_metrics(&self) -> Vec<Metric> {
        self.verdicts
            .iter()
            .filter(|v| !v.passed)
            .map(|v| v.metric)
            .collect()
    }
}

/// Span-based growth screen
#[derive(Debug, Clone)]
pub struct GrowthScreen {
    config: ScreenConfig,
}

impl GrowthScreen {
    /// Create a screen with the given configuration
    ///
    /// # Errors
    /// Returns [`ScreenError::InvalidConfig`] if the configuration is invalid.
    pub fn new(config: ScreenConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create with default configuration.
    ///
    /// # Errors
    /// Returns an error if the default configuration is invalid (should not happen).
    pub fn try_default() -> Result<Self> {
        Self::new(ScreenConfig::default())
    }

    /// Active configuration
    pub const fn config(&self) -> &ScreenConfig {
        &self.config
    }

    /// Screen one company.
    ///
    /// # Errors
    /// Fails if a required metric is missing, too short, or contains `NaN`.
    pub fn evaluate(&self, symbol: &str, history: &FinancialHistory) -> Result<ScreenOutcome> {
        let mut verdicts = Vec::with_capacity(self.config.required_metrics.len());

        for &metric in &self.config.required_metrics {
            let values = history
                .get(metric)
                .ok_or_else(|| ScreenError::MissingMetric {
                    symbol: symbol.to_string(),
                    metric,
                })?;

            if values.len() < self.config.min_observations {
                return Err(ScreenError::InsufficientData {
                    symbol: symbol.to_string(),
                    metric,
                    required: self.config.min_observations,
                    actual: values.len(),
                });
            }

            let profile = SpanProfile::compute(values)?;
            let passed = profile.coverage >= self.config.min_coverage;
            tracing::debug!(
                symbol,
                %metric,
                latest_span = profile.latest_span,
                coverage = profile.coverage,
                passed,
                "profiled metric"
            );
            verdicts.push(MetricVerdict {
                metric,
                profile,
                passed,
            });
        }

        let passed = verdicts.iter().all(|v| v.passed);
        Ok(ScreenOutcome {
            symbol: symbol.to_string(),
            verdicts,
            passed,
        })
    }

    /// Screen a universe of companies.
    ///
    /// Companies that cannot be evaluated are logged and skipped.
    pub fn screen<I, S>(&self, universe: I) -> Vec<ScreenOutcome>
    where
        I: IntoIterator<Item = (S, FinancialHistory)>,
        S: AsRef<str>,
    {
        let mut outcomes = Vec::new();
        let mut skipped = 0_usize;

        for (symbol, history) in universe {
            let symbol = symbol.as_ref();
            match self.evaluate(symbol, &history) {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    skipped += 1;
                    tracing::warn!(symbol, error = %e, "skipping company");
                }
            }
        }

        tracing::info!(
            evaluated = outcomes.len(),
            passed = outcomes.iter().filter(|o| o.passed).count(),
            skipped,
            "growth screen complete"
        );
        outcomes
    }
}
