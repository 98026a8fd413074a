//! Simple Stock Span
//!
//! For each new price, counts the consecutive prices ending at and including it
//! that are less than or equal to it. Uses a monotonic stack, so every update is
//! amortized O(1).

use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::error::{Result, partial_le};
use crate::stack::{Entry, MonotonicStack};

/// Streaming span tracker without history merge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSpanner<T> {
    stack: MonotonicStack<T>,
    observations: usize,
}

impl<T> StockSpanner<T> {
    /// Create an empty tracker
    pub const fn new() -> Self {
        Self {
            stack: MonotonicStack::new(),
            observations: 0,
        }
    }

    /// Number of accepted prices
    pub const fn len(&self) -> usize {
        self.observations
    }

    /// Whether no price has been accepted yet
    pub const fn is_empty(&self) -> bool {
        self.observations == 0
    }

    /// Undefeated prices with their spans, oldest first
    pub fn active(&self) -> &[Entry<T>] {
        self.stack.entries()
    }

    /// Span of the most recent price, if any
    pub fn current_span(&self) -> Option<usize> {
        self.stack.entries().last().map(|entry| entry.streak)
    }

    /// Forget every observation
    pub fn reset(&mut self) {
        self.stack.clear();
        self.observations = 0;
    }
}

impl<T: PartialOrd> StockSpanner<T> {
    /// Submit a price that may be unordered (e.g. `f64::NAN`).
    ///
    /// # Errors
    /// Returns [`SpanError::Incomparable`](crate::SpanError::Incomparable) if the
    /// price cannot be ordered against the values it is compared with. The
    /// tracker is left unchanged in that case.
    pub fn try_next(&mut self, price: T) -> Result<usize> {
        let position = self.observations;
        self.advance(price, |a, b| partial_le(a, b, position))
            .inspect_err(|err| tracing::warn!(error = %err, "stock spanner rejected price"))
    }

    fn advance<E>(
        &mut self,
        price: T,
        le: impl Fn(&T, &T) -> std::result::Result<bool, E>,
    ) -> std::result::Result<usize, E> {
        le(&price, &price)?;
        let defeated = self.stack.defeated_by(&price, &le)?;
        self.observations += 1;
        Ok(self.stack.absorb(price, defeated, |_| {}))
    }
}

impl<T: Ord> StockSpanner<T> {
    /// Submit the next price and return its span (always at least 1)
    pub fn next(&mut self, price: T) -> usize {
        match self.advance(price, |a, b| Ok::<_, Infallible>(a <= b)) {
            Ok(span) => span,
            Err(never) => match never {},
        }
    }
}

impl<T> Default for StockSpanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SpanError;
    use rstest::rstest;

    fn feed(prices: &[i64]) -> Vec<usize> {
        let mut spanner = StockSpanner::new();
        prices.iter().map(|&p| spanner.next(p)).collect()
    }

    #[rstest]
    #[case::classic(&[100, 80, 60, 70, 60, 75, 85], &[1, 1, 1, 2, 1, 4, 6])]
    #[case::increasing(&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5])]
    #[case::decreasing(&[5, 4, 3, 2, 1], &[1, 1, 1, 1, 1])]
    #[case::flat(&[7, 7, 7], &[1, 2, 3])]
    #[case::negative(&[-3, -5, -1, 0], &[1, 1, 3, 4])]
    #[case::single(&[42], &[1])]
    fn test_spans(#[case] prices: &[i64], #[case] expected: &[usize]) {
        assert_eq!(feed(prices), expected);
    }

    #[test]
    fn test_active_stack_is_strictly_decreasing() {
        let mut spanner = StockSpanner::new();
        for p in [100, 80, 60, 70, 60, 75, 85] {
            spanner.next(p);
        }
        let prices: Vec<i32> = spanner.active().iter().map(|e| e.price).collect();
        assert_eq!(prices, vec![100, 85]);
        assert_eq!(spanner.current_span(), Some(6));
        assert_eq!(spanner.len(), 7);
    }

    #[test]
    fn test_nan_is_rejected_without_mutation() {
        let mut spanner = StockSpanner::new();
        spanner.try_next(1.5).unwrap();
        spanner.try_next(0.5).unwrap();
        let before = spanner.clone();

        assert_eq!(
            spanner.try_next(f64::NAN),
            Err(SpanError::Incomparable { position: 2 })
        );
        assert_eq!(spanner, before);
        assert_eq!(spanner.try_next(2.0), Ok(3));
    }

    #[test]
    fn test_reset() {
        let mut spanner = StockSpanner::new();
        spanner.next(3);
        spanner.next(4);
        spanner.reset();
        assert!(spanner.is_empty());
        assert_eq!(spanner.current_span(), None);
        assert_eq!(spanner.next(1), 1);
    }
}
