//! Trend Model Facade
//!
//! Unified re-exports for the trend fitting module.
//!
//! This facade provides a single entry point to all trend functionality:
//! - `TrendModel` trait, `TrendFit`, `ModelKind`/`ModelParams` from SPI
//! - `SelectionConfig` from API
//! - Model implementations and the `analyze` selector from Core

// Re-export everything from SPI
pub use trend_spi::*;

// Re-export everything from API
pub use trend_api::*;

// Re-export everything from Core
pub use trend_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use trend_api::SelectionConfig;
    pub use trend_core::{analyze, analyze_with, least_squares, least_squares_with};
    pub use trend_core::{ExponentialTrend, LinearTrend, QuadraticTrend};
    pub use trend_spi::{
        CandidateScore, ModelKind, ModelParams, Result, TrendError, TrendFit, TrendModel,
    };
}
