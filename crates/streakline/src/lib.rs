#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/streakline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export main types from sub-crates
pub use streakline_screen as screen;
pub use streakline_span as span;

pub use streakline_screen::{FinancialHistory, GrowthScreen, Metric, ScreenConfig};
pub use streakline_span::{GrowthSpanTracker, SpanError, StockSpanner};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
