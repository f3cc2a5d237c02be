//! Candidate evaluation and model selection.

use crate::{ExponentialTrend, LinearTrend, QuadraticTrend};
use trend_api::SelectionConfig;
use trend_spi::{CandidateScore, ModelKind, ModelParams, Result, TrendError, TrendFit, TrendModel};

/// Analyze a series with default conventions. See [`analyze_with`].
pub fn analyze(data: &[f64]) -> Result<TrendFit> {
    analyze_with(data, &SelectionConfig::default())
}

/// Evaluate all applicable candidate models and pick the best fit.
///
/// Candidates are tried in the fixed order linear, quadratic, exponential.
/// The quadratic estimate needs more than two points and the exponential fit
/// strictly positive data; inapplicable candidates are not evaluated at all,
/// while a candidate that fails during computation is kept in the score list
/// with score -1 (disqualified). The winner is the highest score, with ties
/// going to the earliest candidate.
pub fn analyze_with(data: &[f64], config: &SelectionConfig) -> Result<TrendFit> {
    if data.is_empty() {
        return Err(TrendError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }

    let mut all_scores: Vec<CandidateScore> = Vec::new();
    let mut fitted: Vec<(ModelKind, f64, ModelParams)> = Vec::new();

    let mut consider = |kind: ModelKind, outcome: Result<(f64, ModelParams)>| match outcome {
        Ok((score, params)) => {
            all_scores.push(CandidateScore { kind, score });
            fitted.push((kind, score, params));
        }
        Err(_) => {
            all_scores.push(CandidateScore { kind, score: -1.0 });
        }
    };

    consider(ModelKind::Linear, {
        let mut model = LinearTrend::with_config(*config);
        model.fit(data).and_then(|_| Ok((model.score(), model.params()?)))
    });

    if data.len() > 2 {
        consider(ModelKind::Quadratic, {
            let mut model = QuadraticTrend::with_config(*config);
            model.fit(data).and_then(|_| Ok((model.score(), model.params()?)))
        });
    }

    if data.iter().all(|&y| y > 0.0) {
        consider(ModelKind::Exponential, {
            let mut model = ExponentialTrend::with_config(*config);
            model.fit(data).and_then(|_| Ok((model.score(), model.params()?)))
        });
    }

    // First-wins maximum: later candidates must strictly beat the incumbent.
    let mut best: Option<(ModelKind, f64, ModelParams)> = None;
    for &(kind, score, params) in &fitted {
        match best {
            Some((_, best_score, _)) if score <= best_score => {}
            _ => best = Some((kind, score, params)),
        }
    }

    let (kind, score, params) = best.ok_or_else(|| {
        TrendError::NumericalError("no candidate model could be fitted".to_string())
    })?;

    Ok(TrendFit {
        kind,
        score,
        params,
        all_scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_data_selects_linear() {
        let data: Vec<f64> = (0..20).map(|i| 3.0 * i as f64 + 2.0).collect();
        let fit = analyze(&data).unwrap();

        assert_eq!(fit.kind, ModelKind::Linear);
        assert!((fit.score - 1.0).abs() < 1e-10);
        match fit.params {
            ModelParams::Linear { slope, intercept } => {
                assert!((slope - 3.0).abs() < 1e-10);
                assert!((intercept - 2.0).abs() < 1e-10);
            }
            other => panic!("expected linear params, got {other}"),
        }
    }

    #[test]
    fn test_exponential_data_selects_exp() {
        let data = vec![1.0, 2.0, 4.0, 8.0, 16.0, 32.0];
        let fit = analyze(&data).unwrap();

        assert_eq!(fit.kind, ModelKind::Exponential);
        assert!(fit.score > 0.99);
        match fit.params {
            ModelParams::Exponential { amplitude, rate } => {
                assert!((amplitude - 1.0).abs() < 1e-9);
                assert!((rate - std::f64::consts::LN_2).abs() < 1e-9);
            }
            other => panic!("expected exponential params, got {other}"),
        }
    }

    #[test]
    fn test_quadratic_data_selects_quad() {
        // Negative values keep the exponential candidate out
        let data: Vec<f64> = (0..15).map(|i| (i * i) as f64 - 50.0).collect();
        let fit = analyze(&data).unwrap();

        assert_eq!(fit.kind, ModelKind::Quadratic);
        assert!(fit.score > 0.99);
    }

    #[test]
    fn test_flat_data_tie_goes_to_linear() {
        // Linear and exponential both score 0.5 on flat positive data,
        // quadratic scores 0.3; the earliest candidate wins the tie
        let fit = analyze(&[5.0, 5.0, 5.0, 5.0, 5.0]).unwrap();
        assert_eq!(fit.kind, ModelKind::Linear);
        assert_eq!(fit.score, 0.5);
    }

    #[test]
    fn test_short_series_skips_quadratic() {
        let fit = analyze(&[1.0, 2.0]).unwrap();
        assert!(fit
            .all_scores
            .iter()
            .all(|c| c.kind != ModelKind::Quadratic));
    }

    #[test]
    fn test_non_positive_series_skips_exponential() {
        let data: Vec<f64> = (0..10).map(|i| i as f64 - 5.0).collect();
        let fit = analyze(&data).unwrap();
        assert!(fit
            .all_scores
            .iter()
            .all(|c| c.kind != ModelKind::Exponential));
    }

    #[test]
    fn test_single_point_is_linear_degenerate() {
        let fit = analyze(&[42.0]).unwrap();
        assert_eq!(fit.kind, ModelKind::Linear);
        assert_eq!(fit.score, 0.5);
    }

    #[test]
    fn test_empty_series_rejected() {
        assert!(matches!(
            analyze(&[]),
            Err(TrendError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_all_scores_in_candidate_order() {
        let data = vec![1.0, 2.0, 4.0, 8.0];
        let fit = analyze(&data).unwrap();
        let kinds: Vec<ModelKind> = fit.all_scores.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ModelKind::Linear, ModelKind::Quadratic, ModelKind::Exponential]
        );
    }
}
