//! Monotonic price stack shared by the span trackers.

use serde::{Deserialize, Serialize};

/// A price paired with the streak it held when it was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry<T> {
    /// Observed price
    pub price: T,
    /// Span of the price at the time it was recorded
    pub streak: usize,
}

/// Stack of undefeated prices, strictly decreasing from bottom to top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct MonotonicStack<T> {
    entries: Vec<Entry<T>>,
}

impl<T> MonotonicStack<T> {
    pub(crate) const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub(crate) fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries, counted from the top, that `price` defeats.
    ///
    /// Read-only so callers can validate a price before mutating anything.
    pub(crate) fn defeated_by<E>(
        &self,
        price: &T,
        le: &impl Fn(&T, &T) -> Result<bool, E>,
    ) -> Result<usize, E> {
        let mut count = 0;
        for entry in self.entries.iter().rev() {
            if !le(&entry.price, price)? {
                break;
            }
            count += 1;
        }
        Ok(count)
    }

    /// Pop the top `count` entries and push `price` with their combined streak.
    ///
    /// Popped entries are handed to `on_defeat` top first. Returns the streak
    /// assigned to `price`.
    pub(crate) fn absorb(
        &mut self,
        price: T,
        count: usize,
        mut on_defeat: impl FnMut(Entry<T>),
    ) -> usize {
        let split = self.entries.len().saturating_sub(count);
        let mut streak = 1;
        for entry in self.entries.drain(split..).rev() {
            streak += entry.streak;
            on_defeat(entry);
        }
        self.entries.push(Entry { price, streak });
        streak
    }
}
