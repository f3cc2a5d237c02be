//! Trend Model Service Provider Interface
//!
//! Defines traits and types for trend model fitting and selection.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::TrendModel;
pub use error::{Result, TrendError};
pub use model::{CandidateScore, ModelKind, ModelParams, TrendFit};
