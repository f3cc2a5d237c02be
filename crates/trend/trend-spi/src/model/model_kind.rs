//! Trend model families.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The candidate model families, in selection order.
///
/// Selection breaks score ties in favor of the earlier family, so the
/// ordering here (linear, quadratic, exponential) is part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    /// Straight line y = a*n + b
    Linear,
    /// Parabola y = a*n^2 + b*n + c
    Quadratic,
    /// Exponential y = a * e^(b*n)
    Exponential,
}

impl ModelKind {
    /// Candidate evaluation order used by the selector.
    pub const CANDIDATE_ORDER: [ModelKind; 3] =
        [ModelKind::Linear, ModelKind::Quadratic, ModelKind::Exponential];
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Linear => write!(f, "LINEAR"),
            ModelKind::Quadratic => write!(f, "QUAD"),
            ModelKind::Exponential => write!(f, "EXP"),
        }
    }
}
