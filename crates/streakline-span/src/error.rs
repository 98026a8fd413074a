//! Error types for span tracking.

use std::cmp::Ordering;

use thiserror::Error;

/// Result type for span operations.
pub type Result<T> = std::result::Result<T, SpanError>;

/// Errors that can occur while tracking spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpanError {
    /// The submitted price has no ordering relative to the tracked series
    #[error("Incomparable price at position {position}: value has no ordering against the series")]
    Incomparable {
        /// Zero-based index of the rejected observation
        position: usize,
    },
}

/// `a <= b` under a partial order, failing when the pair is unordered.
pub(crate) fn partial_le<T: PartialOrd>(a: &T, b: &T, position: usize) -> Result<bool> {
    match a.partial_cmp(b) {
        Some(ordering) => Ok(ordering != Ordering::Greater),
        None => Err(SpanError::Incomparable { position }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_le_orders_floats() {
        assert_eq!(partial_le(&1.0, &2.0, 0), Ok(true));
        assert_eq!(partial_le(&2.0, &2.0, 0), Ok(true));
        assert_eq!(partial_le(&3.0, &2.0, 0), Ok(false));
    }

    #[test]
    fn test_partial_le_rejects_nan() {
        assert_eq!(
            partial_le(&f64::NAN, &1.0, 7),
            Err(SpanError::Incomparable { position: 7 })
        );
    }

    #[test]
    fn test_error_message() {
        let err = SpanError::Incomparable { position: 3 };
        assert!(err.to_string().contains("position 3"));
    }
}
