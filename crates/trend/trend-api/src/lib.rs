//! Trend Model API
//!
//! Configuration types for trend fitting and model selection.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use trend_spi::{CandidateScore, ModelKind, ModelParams, Result, TrendError, TrendFit, TrendModel};

/// Model selection configuration.
///
/// The degenerate-fit scores are reporting conventions, not tunables you
/// would normally touch: near-constant data gets 0.5 from the least-squares
/// fit and 0.3 from the finite-difference quadratic estimate, reflecting
/// lower trust in the latter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Threshold below which a variance or denominator counts as zero.
    pub epsilon: f64,
    /// Score assigned to a least-squares fit of near-constant data.
    pub flat_score: f64,
    /// Score assigned to a quadratic estimate of near-constant data.
    pub flat_quadratic_score: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-10,
            flat_score: 0.5,
            flat_quadratic_score: 0.3,
        }
    }
}

impl SelectionConfig {
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SelectionConfig::default();
        assert_eq!(config.epsilon, 1e-10);
        assert_eq!(config.flat_score, 0.5);
        assert_eq!(config.flat_quadratic_score, 0.3);
    }

    #[test]
    fn test_new_keeps_score_conventions() {
        let config = SelectionConfig::new(1e-8);
        assert_eq!(config.epsilon, 1e-8);
        assert_eq!(config.flat_score, 0.5);
    }
}
