//! # report
//!
//! Batch processing, aggregation and stability scoring for trendful-ts.
//! Ties the ingest, trend and anomaly crates into one pipeline: text in,
//! per-batch summaries and an overall stability report out.

mod aggregate;
mod engine;
mod error;
mod forecast;
mod stability;
mod stats;
mod summary;

pub use aggregate::*;
pub use engine::*;
pub use error::*;
pub use forecast::*;
pub use stability::*;
pub use stats::*;
pub use summary::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::aggregate::{aggregate, OverallReport};
    pub use crate::engine::{Analysis, Engine, EngineConfig};
    pub use crate::error::{ReportError, Result};
    pub use crate::forecast::{project, Prediction};
    pub use crate::stability::stability_score;
    pub use crate::stats::DescriptiveStats;
    pub use crate::summary::{process_batch, process_batch_with, BatchSummary};
}
