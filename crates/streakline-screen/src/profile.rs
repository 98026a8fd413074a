//! Span profile of a single series
//!
//! Runs both span trackers over a series and summarizes how much of the
//! history the latest observation dominates.

use serde::{Deserialize, Serialize};
use streakline_span::{GrowthSpanTracker, SpanError, StockSpanner};

/// Span statistics for one series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanProfile {
    /// Simple span of every observation
    pub spans: Vec<usize>,
    /// Growth span of every observation
    pub growth_spans: Vec<usize>,
    /// Simple span of the latest observation (0 for an empty series)
    pub latest_span: usize,
    /// Growth span of the latest observation (0 for an empty series)
    pub latest_growth_span: usize,
    /// `latest_span / len`, the fraction of the series at or below the latest value
    pub coverage: f64,
}

impl SpanProfile {
    /// Profile `values`, oldest first.
    ///
    /// # Errors
    /// Returns [`SpanError::Incomparable`] if the series contains `NaN`.
    pub fn compute(values: &[f64]) -> Result<Self, SpanError> {
        let mut spanner = StockSpanner::new();
        let mut tracker = GrowthSpanTracker::new();
        let mut spans = Vec::with_capacity(values.len());
        let mut growth_spans = Vec::with_capacity(values.len());

        for &value in values {
            spans.push(spanner.try_next(value)?);
            growth_spans.push(tracker.try_next(value)?);
        }

        let latest_span = spans.last().copied().unwrap_or(0);
        let latest_growth_span = growth_spans.last().copied().unwrap_or(0);
        let coverage = if values.is_empty() {
            0.0
        } else {
            latest_span as f64 / values.len() as f64
        };

        Ok(Self {
            spans,
            growth_spans,
            latest_span,
            latest_growth_span,
            coverage,
        })
    }

    /// Whether the latest observation is the highest in the series
    pub fn at_high(&self) -> bool {
        !self.spans.is_empty() && self.latest_span == self.spans.len()
    }
}
