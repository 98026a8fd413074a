//! Whole-series helpers that run a fresh tracker over every price.

use crate::error::Result;
use crate::growth::GrowthSpanTracker;
use crate::spanner::StockSpanner;

/// Simple spans of a totally ordered series
pub fn spans<T: Ord>(prices: impl IntoIterator<Item = T>) -> Vec<usize> {
    let mut spanner = StockSpanner::new();
    prices.into_iter().map(|p| spanner.next(p)).collect()
}

/// Simple spans of a partially ordered series.
///
/// # Errors
/// Fails on the first price that cannot be ordered against the series.
pub fn try_spans<T: PartialOrd>(prices: impl IntoIterator<Item = T>) -> Result<Vec<usize>> {
    let mut spanner = StockSpanner::new();
    prices.into_iter().map(|p| spanner.try_next(p)).collect()
}

/// Growth spans of a totally ordered series
pub fn growth_spans<T: Ord>(prices: impl IntoIterator<Item = T>) -> Vec<usize> {
    let mut tracker = GrowthSpanTracker::new();
    prices.into_iter().map(|p| tracker.next(p)).collect()
}

/// Growth spans of a partially ordered series.
///
/// # Errors
/// Fails on the first price that cannot be ordered against the series.
pub fn try_growth_spans<T: PartialOrd>(
    prices: impl IntoIterator<Item = T>,
) -> Result<Vec<usize>> {
    let mut tracker = GrowthSpanTracker::new();
    prices.into_iter().map(|p| tracker.try_next(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SpanError;

    #[test]
    fn test_batch_matches_streaming() {
        let prices = [100, 80, 60, 70, 60, 75, 85];
        assert_eq!(spans(prices), vec![1, 1, 1, 2, 1, 4, 6]);
        assert_eq!(growth_spans([100, 70, 60, 80]), vec![1, 1, 1, 5]);
    }

    #[test]
    fn test_try_spans_stops_at_nan() {
        let result = try_spans([1.0, 2.0, f64::NAN, 3.0]);
        assert_eq!(result, Err(SpanError::Incomparable { position: 2 }));
        assert_eq!(try_growth_spans([2.5, 1.5]), Ok(vec![1, 1]));
    }

    #[test]
    fn test_empty_series() {
        assert!(spans(Vec::<u32>::new()).is_empty());
        assert!(growth_spans(Vec::<u32>::new()).is_empty());
    }
}
