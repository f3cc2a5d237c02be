//! Cross-batch aggregation.

use crate::forecast::{project, Prediction};
use crate::stability::stability_score;
use crate::summary::BatchSummary;
use anomaly_facade::RiskLevel;
use serde::{Deserialize, Serialize};
use trend_facade::TrendFit;

/// Read-only rollup over every processed batch.
///
/// Mean, standard deviation and fit score are averaged across batch values,
/// not recomputed from the pooled raw samples. The canonical model is the
/// single best-scoring batch fit; on score ties the earlier batch wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallReport {
    /// Raw samples across all summarized batches.
    pub total_points: usize,
    /// Samples that survived cleaning, across batches.
    pub valid_points: usize,
    /// Parse- plus clean-stage rejects, across batches.
    pub invalid_points: usize,
    /// Number of batches that produced a summary.
    pub batches: usize,
    /// Average of per-batch means.
    pub mean: f64,
    /// Average of per-batch standard deviations.
    pub std_dev: f64,
    /// Average of per-batch fit scores.
    pub avg_score: f64,
    /// The best-scoring batch fit, canonical for the whole run.
    pub best_fit: TrendFit,
    /// Outliers across all batches.
    pub total_anomalies: usize,
    /// Worst danger rating across batches.
    pub danger: RiskLevel,
    /// Weighted 0-100 stability score.
    pub stability: f64,
    /// Projections at the stream end and two short horizons.
    pub predictions: Vec<Prediction>,
}

/// Roll all batch summaries up into one report. Returns `None` when no
/// batch produced a summary.
pub fn aggregate(summaries: &[BatchSummary]) -> Option<OverallReport> {
    if summaries.is_empty() {
        return None;
    }

    let n = summaries.len() as f64;
    let total_points: usize = summaries.iter().map(|s| s.total).sum();
    let valid_points: usize = summaries.iter().map(|s| s.valid).sum();
    let invalid_points: usize = summaries.iter().map(|s| s.total_invalid).sum();
    let total_anomalies: usize = summaries.iter().map(|s| s.anomaly_count()).sum();

    let mean = summaries.iter().map(|s| s.stats.mean).sum::<f64>() / n;
    let std_dev = summaries.iter().map(|s| s.stats.std_dev).sum::<f64>() / n;
    let avg_score = summaries.iter().map(|s| s.fit.score).sum::<f64>() / n;

    let mut best: &BatchSummary = &summaries[0];
    for summary in &summaries[1..] {
        if summary.fit.score > best.fit.score {
            best = summary;
        }
    }

    let danger = summaries
        .iter()
        .map(|s| s.danger())
        .max()
        .unwrap_or(RiskLevel::Low);

    let stability = stability_score(invalid_points, total_points, total_anomalies, danger);
    let predictions = project(&best.fit.params, total_points, mean);

    Some(OverallReport {
        total_points,
        valid_points,
        invalid_points,
        batches: summaries.len(),
        mean,
        std_dev,
        avg_score,
        best_fit: best.fit.clone(),
        total_anomalies,
        danger,
        stability,
        predictions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::process_batch;
    use trend_facade::ModelKind;

    fn summarize(values: &[f64], id: usize, parse_rejected: usize) -> BatchSummary {
        process_batch(values, id, parse_rejected).unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(&[]).is_none());
    }

    #[test]
    fn test_counts_are_summed() {
        let a: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let mut b: Vec<f64> = (0..10).map(|i| 10.0 + i as f64).collect();
        b.push(f64::NAN);

        let report = aggregate(&[summarize(&a, 1, 3), summarize(&b, 2, 0)]).unwrap();
        assert_eq!(report.total_points, 21);
        assert_eq!(report.valid_points, 20);
        assert_eq!(report.invalid_points, 4);
        assert_eq!(report.batches, 2);
    }

    #[test]
    fn test_statistics_are_batch_averages() {
        let a = vec![0.0, 0.0, 0.0, 20.0];
        let b = vec![10.0; 4];

        let report = aggregate(&[summarize(&a, 1, 0), summarize(&b, 2, 0)]).unwrap();
        // means 5.0 and 10.0, averaged, not pooled
        assert!((report.mean - 7.5).abs() < 1e-12);
    }

    #[test]
    fn test_best_fit_is_single_highest_score() {
        let noisy = vec![5.0, 9.0, 2.0, 8.0, 1.0, 7.0, 3.0];
        let line: Vec<f64> = (0..10).map(|i| 2.0 * i as f64 + 1.0).collect();

        let report = aggregate(&[summarize(&noisy, 1, 0), summarize(&line, 2, 0)]).unwrap();
        assert_eq!(report.best_fit.kind, ModelKind::Linear);
        assert!(report.best_fit.score > 0.99);
        assert!(report.avg_score < report.best_fit.score);
    }

    #[test]
    fn test_danger_is_worst_across_batches() {
        let calm: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let mut spiked = vec![10.0; 50];
        spiked[10] = 10_000.0;

        let report = aggregate(&[summarize(&calm, 1, 0), summarize(&spiked, 2, 0)]).unwrap();
        assert_eq!(report.danger, RiskLevel::Critical);
        assert_eq!(report.total_anomalies, 1);
    }

    #[test]
    fn test_predictions_anchor_at_total_points() {
        let line: Vec<f64> = (0..10).map(|i| 3.0 * i as f64).collect();
        let report = aggregate(&[summarize(&line, 1, 0)]).unwrap();

        assert_eq!(report.predictions.len(), 3);
        assert_eq!(report.predictions[0].position, 10);
        assert_eq!(report.predictions[2].position, 20);
        assert!((report.predictions[0].value - 30.0).abs() < 1e-6);
    }
}
