//! Forward projection from the selected model.

use serde::{Deserialize, Serialize};
use trend_facade::ModelParams;

/// Positions projected past the end of the stream, relative to its length.
pub const FORECAST_OFFSETS: [usize; 3] = [0, 5, 10];

/// Placeholder uncertainty attached to every prediction. Not a computed
/// confidence interval.
pub const FORECAST_UNCERTAINTY: f64 = 2.5;

/// One projected value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Prediction {
    /// Absolute sample position the value is projected at.
    pub position: usize,
    pub value: f64,
    /// Fixed +/- band around the value.
    pub uncertainty: f64,
}

/// Project the selected model at the stream end and two short horizons.
///
/// Evaluates the model's closed form at `total_points + {0, 5, 10}`. A
/// non-finite evaluation falls back to `fallback` (the overall mean) so the
/// forecast never carries NaN or infinity outward.
pub fn project(params: &ModelParams, total_points: usize, fallback: f64) -> Vec<Prediction> {
    FORECAST_OFFSETS
        .iter()
        .map(|&offset| {
            let position = total_points + offset;
            let raw = params.evaluate(position as f64);
            let value = if raw.is_finite() { raw } else { fallback };
            Prediction {
                position,
                value,
                uncertainty: FORECAST_UNCERTAINTY,
            }
        })
        .collect()
}
