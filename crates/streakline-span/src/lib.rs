#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/streakline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod error;
pub mod growth;
pub mod spanner;

mod stack;

pub use batch::{growth_spans, spans, try_growth_spans, try_spans};
pub use error::{Result, SpanError};
pub use growth::GrowthSpanTracker;
pub use spanner::StockSpanner;
pub use stack::Entry;
