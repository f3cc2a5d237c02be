//! The end-to-end analysis engine.

use crate::aggregate::{aggregate, OverallReport};
use crate::error::{ReportError, Result};
use crate::summary::{process_batch_with, BatchSummary};
use anomaly_facade::{Anomaly, ZScoreConfig};
use ingest::{parse, split_batches};
use serde::{Deserialize, Serialize};
use trend_facade::SelectionConfig;

/// Default number of samples per batch.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Engine configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Samples per batch; the last batch may be shorter.
    pub batch_size: usize,
    /// Outlier detection settings.
    pub zscore: ZScoreConfig,
    /// Model selection settings.
    pub selection: SelectionConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            zscore: ZScoreConfig::default(),
            selection: SelectionConfig::default(),
        }
    }
}

/// Full output of one engine run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Tokens rejected at the parse stage.
    pub parse_rejected: usize,
    /// Every batch that produced a summary, in stream order.
    pub batches: Vec<BatchSummary>,
    /// Cross-batch rollup.
    pub overall: OverallReport,
}

impl Analysis {
    /// All outliers across batches, as (batch id, anomaly) pairs.
    pub fn all_anomalies(&self) -> Vec<(usize, Anomaly)> {
        self.batches
            .iter()
            .flat_map(|b| b.detection.anomalies.iter().map(|&a| (b.id, a)))
            .collect()
    }
}

/// Runs the whole pipeline over one text blob.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Get the active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parse, batch, process and aggregate one input text.
    ///
    /// Batches run strictly in stream order; a batch that yields no summary
    /// is skipped and does not count toward the totals. Fails only when the
    /// entire input yields no processable batch.
    pub fn analyze_text(&self, raw: &str) -> Result<Analysis> {
        let outcome = parse(raw);
        tracing::debug!(
            samples = outcome.len(),
            rejected = outcome.rejected,
            "parsed input"
        );
        if outcome.is_empty() {
            return Err(ReportError::NoValidData);
        }

        let batches = split_batches(&outcome.values, self.config.batch_size, outcome.rejected);
        let mut summaries = Vec::with_capacity(batches.len());
        for batch in batches {
            match process_batch_with(
                batch.values,
                batch.id,
                batch.parse_rejected,
                &self.config.selection,
                &self.config.zscore,
            ) {
                Some(summary) => {
                    tracing::debug!(
                        batch = summary.id,
                        valid = summary.valid,
                        model = %summary.fit.kind,
                        anomalies = summary.anomaly_count(),
                        "batch processed"
                    );
                    summaries.push(summary);
                }
                None => {
                    tracing::debug!(batch = batch.id, "batch skipped, nothing survived cleaning");
                }
            }
        }

        let overall = aggregate(&summaries).ok_or(ReportError::NoValidData)?;
        tracing::debug!(
            batches = overall.batches,
            stability = overall.stability,
            danger = %overall.danger,
            "analysis complete"
        );

        Ok(Analysis {
            parse_rejected: outcome.rejected,
            batches: summaries,
            overall,
        })
    }
}
