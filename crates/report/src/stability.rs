//! Stability scoring.

use anomaly_facade::RiskLevel;

/// Weighted 0-100 stability score for a whole run.
///
/// `0.5 * data_quality + 0.3 * (100 - anomaly_ratio) + 0.2 * danger_score`,
/// rounded to two decimals. Both ratios are 0 when `total_points` is 0.
pub fn stability_score(
    total_invalid: usize,
    total_points: usize,
    anomaly_count: usize,
    danger: RiskLevel,
) -> f64 {
    let (data_quality, anomaly_ratio) = if total_points > 0 {
        let total = total_points as f64;
        (
            (total - total_invalid as f64) / total * 100.0,
            anomaly_count as f64 / total * 100.0,
        )
    } else {
        (0.0, 0.0)
    };

    let danger_score = match danger {
        RiskLevel::Low => 100.0,
        RiskLevel::High => 50.0,
        RiskLevel::Critical => 0.0,
    };

    let stability = data_quality * 0.5 + (100.0 - anomaly_ratio) * 0.3 + danger_score * 0.2;
    (stability * 100.0).round() / 100.0
}
