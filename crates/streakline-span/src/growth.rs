//! Growth Span Tracker
//!
//! Extends the simple stock span with a permanent record of defeated prices.
//! When a price is popped from the active stack it is appended to the history
//! together with the streak it held at that moment. Every new price then walks
//! the history backward from the most recent defeat and folds in the streak of
//! each entry it dominates, stopping at the first entry that is strictly
//! greater. The result is a cumulative span across the whole series rather
//! than only the currently active run.
//!
//! Example with prices `[100, 70, 60, 80]`:
//! - `100`, `70` and `60` each report 1 (nothing before them is smaller).
//! - `80` defeats `60` and `70`, so its own streak is 3 and the history
//!   becomes `[(60, 1), (70, 1)]`.
//! - Scanning the history backward adds 1 for `70` and 1 for `60`, reporting 5.
//!
//! The pop phase is amortized O(1). The history scan costs one step per merged
//! entry, which is O(n) for long rising stretches.

use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::error::{Result, partial_le};
use crate::stack::{Entry, MonotonicStack};

/// Streaming span tracker with historical streak aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthSpanTracker<T> {
    active: MonotonicStack<T>,
    history: Vec<Entry<T>>,
    current_streak: usize,
    observations: usize,
}

impl<T> GrowthSpanTracker<T> {
    /// Create an empty tracker
    pub const fn new() -> Self {
        Self {
            active: MonotonicStack::new(),
            history: Vec::new(),
            current_streak: 0,
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

    /// Undefeated prices with their own streaks, oldest first
    pub fn active(&self) -> &[Entry<T>] {
        self.active.entries()
    }

    /// Defeated prices in the order they were defeated
    pub fn history(&self) -> &[Entry<T>] {
        &self.history
    }

    /// Own streak of the most recently pushed price (0 before any price)
    pub const fn current_streak(&self) -> usize {
        self.current_streak
    }

    /// Forget every observation
    pub fn reset(&mut self) {
        self.active.clear();
        self.history.clear();
        self.current_streak = 0;
        self.observations = 0;
    }
}

impl<T: PartialOrd> GrowthSpanTracker<T> {
    /// Submit a price that may be unordered (e.g. `f64::NAN`).
    ///
    /// # Errors
    /// Returns [`SpanError::Incomparable`](crate::SpanError::Incomparable) if the
    /// price cannot be ordered against the values it is compared with. All
    /// comparisons happen before any state changes, so a rejected price leaves
    /// the tracker untouched.
    pub fn try_next(&mut self, price: T) -> Result<usize> {
        let position = self.observations;
        self.advance(price, |a, b| partial_le(a, b, position))
            .inspect_err(|err| tracing::warn!(error = %err, "growth span tracker rejected price"))
    }

    fn advance<E>(
        &mut self,
        price: T,
        le: impl Fn(&T, &T) -> std::result::Result<bool, E>,
    ) -> std::result::Result<usize, E> {
        le(&price, &price)?;
        let defeated = self.active.defeated_by(&price, &le)?;
        // Entries defeated by this price are all <= it, so the backward scan
        // always passes through them and continues into the earlier history.
        let earlier = self.merged_history(&price, &le)?;

        self.observations += 1;
        let history = &mut self.history;
        let mut absorbed = 0;
        let own = self.active.absorb(price, defeated, |entry| {
            absorbed += entry.streak;
            history.push(entry);
        });
        self.current_streak = own;

        Ok(own + absorbed + earlier)
    }

    /// Sum of trailing history streaks dominated by `price`.
    fn merged_history<E>(
        &self,
        price: &T,
        le: &impl Fn(&T, &T) -> std::result::Result<bool, E>,
    ) -> std::result::Result<usize, E> {
        let mut merged = 0;
        for entry in self.history.iter().rev() {
            if !le(&entry.price, price)? {
                break;
            }
            merged += entry.streak;
        }
        Ok(merged)
    }
}

impl<T: Ord> GrowthSpanTracker<T> {
    /// Submit the next price and return its growth span (always at least 1)
    pub fn next(&mut self, price: T) -> usize {
        match self.advance(price, |a, b| Ok::<_, Infallible>(a <= b)) {
            Ok(streak) => streak,
            Err(never) => match never {},
        }
    }
}

impl<T> Default for GrowthSpanTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}
