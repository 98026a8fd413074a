//! Span columns for price panels
//!
//! Annotates a long-format `symbol`/`date`/`price` panel with the simple span
//! and growth span of every observation, tracking each symbol independently.

use std::collections::HashMap;

use polars::prelude::*;
use streakline_span::{GrowthSpanTracker, StockSpanner};

/// Columns the panel must contain
pub const REQUIRED_COLUMNS: &[&str] = &["symbol", "date", "price"];

/// Name of the simple span output column
pub const SPAN_COLUMN: &str = "span";

/// Name of the growth span output column
pub const GROWTH_SPAN_COLUMN: &str = "growth_span";

#[derive(Debug, Default)]
struct SymbolTrackers {
    spanner: StockSpanner<f64>,
    growth: GrowthSpanTracker<f64>,
}

/// Add `span` and `growth_span` columns to a price panel.
///
/// Rows are sorted by `symbol` then `date` (ties keep their input order) before
/// the trackers run. `price` may be any numeric type. Null prices yield null
/// spans and do not advance the trackers.
///
/// # Errors
/// Fails if a required column is missing, `price` is not numeric, or a price
/// is `NaN`.
pub fn annotate_spans(df: DataFrame) -> PolarsResult<DataFrame> {
    for name in REQUIRED_COLUMNS {
        df.column(name)?;
    }

    let mut sorted = df
        .lazy()
        .sort(
            ["symbol", "date"],
            SortMultipleOptions::default().with_maintain_order(true),
        )
        .collect()?;

    let (spans, growth_spans) = {
        let symbols = sorted.column("symbol")?.as_materialized_series().str()?.clone();
        let prices = sorted
            .column("price")?
            .as_materialized_series()
            .cast(&DataType::Float64)?;
        let prices = prices.f64()?;

        let mut trackers: HashMap<Option<&str>, SymbolTrackers> = HashMap::new();
        let mut spans: Vec<Option<u64>> = Vec::with_capacity(sorted.height());
        let mut growth_spans: Vec<Option<u64>> = Vec::with_capacity(sorted.height());

        for (symbol, price) in symbols.into_iter().zip(prices.into_iter()) {
            let Some(price) = price else {
                spans.push(None);
                growth_spans.push(None);
                continue;
            };
            let state = trackers.entry(symbol).or_default();
            let span = state.spanner.try_next(price).map_err(to_polars)?;
            let growth = state.growth.try_next(price).map_err(to_polars)?;
            spans.push(Some(span as u64));
            growth_spans.push(Some(growth as u64));
        }

        tracing::debug!(
            rows = spans.len(),
            symbols = trackers.len(),
            "annotated price panel with spans"
        );
        (spans, growth_spans)
    };

    sorted.with_column(Series::new(SPAN_COLUMN.into(), spans))?;
    sorted.with_column(Series::new(GROWTH_SPAN_COLUMN.into(), growth_spans))?;
    Ok(sorted)
}

fn to_polars(err: streakline_span::SpanError) -> PolarsError {
    PolarsError::ComputeError(err.to_string().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_u64(df: &DataFrame, name: &str) -> Vec<Option<u64>> {
        df.column(name)
            .unwrap()
            .as_materialized_series()
            .u64()
            .unwrap()
            .into_iter()
            .collect()
    }

    #[test]
    fn test_spans_per_symbol() {
        let df = df! {
            "symbol" => ["B", "A", "A", "B", "A", "A"],
            "date" => [1i32, 1, 2, 2, 3, 4],
            "price" => [5.0, 100.0, 70.0, 6.0, 60.0, 80.0],
        }
        .unwrap();

        let out = annotate_spans(df).unwrap();

        assert_eq!(
            column_u64(&out, SPAN_COLUMN),
            vec![Some(1), Some(1), Some(1), Some(3), Some(1), Some(2)]
        );
        assert_eq!(
            column_u64(&out, GROWTH_SPAN_COLUMN),
            vec![Some(1), Some(1), Some(1), Some(5), Some(1), Some(3)]
        );
    }

    #[test]
    fn test_sorts_by_date_within_symbol() {
        let df = df! {
            "symbol" => ["A", "A", "A"],
            "date" => [3i32, 1, 2],
            "price" => [3i64, 1, 2],
        }
        .unwrap();

        let out = annotate_spans(df).unwrap();
        assert_eq!(
            column_u64(&out, SPAN_COLUMN),
            vec![Some(1), Some(2), Some(3)]
        );
    }

    #[test]
    fn test_null_price_skipped() {
        let df = df! {
            "symbol" => ["A", "A", "A"],
            "date" => [1i32, 2, 3],
            "price" => [Some(1.0), None, Some(2.0)],
        }
        .unwrap();

        let out = annotate_spans(df).unwrap();
        assert_eq!(column_u64(&out, SPAN_COLUMN), vec![Some(1), None, Some(2)]);
    }

    #[test]
    fn test_nan_price_is_error() {
        let df = df! {
            "symbol" => ["A", "A"],
            "date" => [1i32, 2],
            "price" => [1.0, f64::NAN],
        }
        .unwrap();

        assert!(matches!(
            annotate_spans(df),
            Err(PolarsError::ComputeError(_))
        ));
    }

    #[test]
    fn test_missing_column() {
        let df = df! {
            "symbol" => ["A"],
            "price" => [1.0],
        }
        .unwrap();

        assert!(annotate_spans(df).is_err());
    }
}
