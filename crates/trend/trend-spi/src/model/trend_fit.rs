//! Model selection results.

use crate::model::{ModelKind, ModelParams};
use serde::{Deserialize, Serialize};

/// Score of one evaluated candidate.
///
/// A score of -1.0 marks a candidate whose computation failed; it stays in
/// the list but is effectively disqualified from selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub kind: ModelKind,
    pub score: f64,
}

/// The model chosen for one series, with its score and every candidate score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendFit {
    /// The winning model family.
    pub kind: ModelKind,
    /// Goodness-of-fit score of the winner.
    pub score: f64,
    /// Fitted coefficients of the winner.
    pub params: ModelParams,
    /// Scores of all evaluated candidates, in evaluation order.
    pub all_scores: Vec<CandidateScore>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_fit_roundtrip_serde() {
        let fit = TrendFit {
            kind: ModelKind::Linear,
            score: 0.98,
            params: ModelParams::Linear {
                slope: 2.0,
                intercept: 1.0,
            },
            all_scores: vec![CandidateScore {
                kind: ModelKind::Linear,
                score: 0.98,
            }],
        };
        let json = serde_json::to_string(&fit).unwrap();
        let back: TrendFit = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind, ModelKind::Linear);
        assert!((back.score - 0.98).abs() < 1e-12);
    }
}
