//! Pipeline error types.

use thiserror::Error;

/// Errors surfaced by the analysis engine.
///
/// Per-batch trouble (degenerate statistics, empty cleaned batches, failed
/// candidate models) never reaches this level; it degrades to documented
/// defaults inside the pipeline. The engine only fails when the input as a
/// whole yields nothing to analyze.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    /// No numeric sample survived parsing and cleaning.
    #[error("no valid data points could be recovered from the input")]
    NoValidData,
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
