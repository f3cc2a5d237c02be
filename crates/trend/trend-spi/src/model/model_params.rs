//! Fitted coefficient sets.

use crate::model::ModelKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coefficient set of a fitted trend model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ModelParams {
    /// y = slope*n + intercept
    Linear { slope: f64, intercept: f64 },
    /// y = a*n^2 + b*n + c
    Quadratic { a: f64, b: f64, c: f64 },
    /// y = amplitude * e^(rate*n)
    Exponential { amplitude: f64, rate: f64 },
}

impl ModelParams {
    /// Which model family these coefficients belong to.
    pub fn kind(&self) -> ModelKind {
        match self {
            ModelParams::Linear { .. } => ModelKind::Linear,
            ModelParams::Quadratic { .. } => ModelKind::Quadratic,
            ModelParams::Exponential { .. } => ModelKind::Exponential,
        }
    }

    /// Evaluate the model's closed form at the given position.
    pub fn evaluate(&self, pos: f64) -> f64 {
        match *self {
            ModelParams::Linear { slope, intercept } => slope * pos + intercept,
            ModelParams::Quadratic { a, b, c } => a * pos * pos + b * pos + c,
            ModelParams::Exponential { amplitude, rate } => amplitude * (rate * pos).exp(),
        }
    }
}

impl fmt::Display for ModelParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ModelParams::Linear { slope, intercept } => {
                write!(f, "LINEAR(slope={:.6}, intercept={:.6})", slope, intercept)
            }
            ModelParams::Quadratic { a, b, c } => {
                write!(f, "QUAD(a={:.6}, b={:.6}, c={:.6})", a, b, c)
            }
            ModelParams::Exponential { amplitude, rate } => {
                write!(f, "EXP(amplitude={:.6}, rate={:.6})", amplitude, rate)
            }
        }
    }
}
