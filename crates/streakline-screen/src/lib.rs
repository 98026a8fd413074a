#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/streakline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod frame;
pub mod metric;
pub mod profile;
pub mod screen;

pub use config::ScreenConfig;
pub use error::{Result, ScreenError};
pub use frame::annotate_spans;
pub use metric::{FinancialHistory, Metric};
pub use profile::SpanProfile;
pub use screen::{GrowthScreen, MetricVerdict, ScreenOutcome};
