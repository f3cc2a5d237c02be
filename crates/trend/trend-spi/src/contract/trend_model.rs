//! Trend model contract.

use crate::error::Result;
use crate::model::{ModelKind, ModelParams};

/// Common trait for all trend models fitted against an index sequence.
///
/// The independent variable is always the sample index 0..n-1; implementors
/// fit their coefficient set to the dependent values and report a
/// goodness-of-fit score.
pub trait TrendModel {
    /// Fit the model to the given values.
    fn fit(&mut self, data: &[f64]) -> Result<()>;

    /// Evaluate the fitted model at an arbitrary position.
    fn predict_at(&self, pos: f64) -> Result<f64>;

    /// Goodness-of-fit score in [0, 1] from the last fit.
    fn score(&self) -> f64;

    /// Fitted coefficient set.
    fn params(&self) -> Result<ModelParams>;

    /// Which model family this is.
    fn kind(&self) -> ModelKind;

    /// Check if the model has been fitted.
    fn is_fitted(&self) -> bool;
}
