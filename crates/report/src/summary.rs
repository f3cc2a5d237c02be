//! Per-batch processing: clean, fit, scan, summarize.

use crate::stats::DescriptiveStats;
use anomaly_facade::{scan_with, DetectionReport, RiskLevel, ZScoreConfig};
use ingest::clean;
use serde::{Deserialize, Serialize};
use trend_facade::{analyze_with, SelectionConfig, TrendFit};

/// Everything known about one processed batch.
///
/// Immutable once produced. `total` counts the raw samples handed to the
/// batch; parse-stage rejects attributed to it are carried separately and
/// never appear in `total`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    /// 1-based batch id.
    pub id: usize,
    /// Raw samples in the batch before cleaning.
    pub total: usize,
    /// Samples that survived cleaning.
    pub valid: usize,
    /// Parse-stage rejects attributed to this batch.
    pub invalid_parse: usize,
    /// Samples dropped by the cleaner (non-finite or oversized).
    pub invalid_clean: usize,
    /// `invalid_parse + invalid_clean`.
    pub total_invalid: usize,
    /// Descriptive statistics over the cleaned samples.
    pub stats: DescriptiveStats,
    /// Selected trend model with candidate scores.
    pub fit: TrendFit,
    /// Outliers found in the cleaned samples.
    pub detection: DetectionReport,
}

impl BatchSummary {
    /// Count of outliers in this batch.
    pub fn anomaly_count(&self) -> usize {
        self.detection.anomaly_count()
    }

    /// Danger rating of this batch.
    pub fn danger(&self) -> RiskLevel {
        self.detection.danger
    }
}

/// Process one batch with default configuration.
pub fn process_batch(values: &[f64], id: usize, parse_rejected: usize) -> Option<BatchSummary> {
    process_batch_with(
        values,
        id,
        parse_rejected,
        &SelectionConfig::default(),
        &ZScoreConfig::default(),
    )
}

/// Process one batch: clean it, compute statistics, fit trend models and
/// scan for outliers.
///
/// Returns `None` when no sample survives cleaning or no trend model can be
/// fitted; callers skip such batches entirely so one bad batch never stops
/// the rest of the run.
pub fn process_batch_with(
    values: &[f64],
    id: usize,
    parse_rejected: usize,
    selection: &SelectionConfig,
    zscore: &ZScoreConfig,
) -> Option<BatchSummary> {
    let (cleaned, invalid_clean) = clean(values);
    let stats = DescriptiveStats::from_values(&cleaned)?;
    let fit = analyze_with(&cleaned, selection).ok()?;
    let detection = scan_with(&cleaned, zscore);

    Some(BatchSummary {
        id,
        total: values.len(),
        valid: cleaned.len(),
        invalid_parse: parse_rejected,
        invalid_clean,
        total_invalid: parse_rejected + invalid_clean,
        stats,
        fit,
        detection,
    })
}
