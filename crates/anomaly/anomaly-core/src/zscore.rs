//! Z-Score based anomaly detector with severity tiers.

use anomaly_api::ZScoreConfig;
use anomaly_spi::{
    Anomaly, AnomalyDetector, AnomalyError, DetectionReport, Result, Severity,
};
use serde::{Deserialize, Serialize};

/// Standard deviation at or below this counts as zero and is replaced by 1,
/// so constant sequences score 0 everywhere instead of dividing by zero.
const STD_FLOOR: f64 = 1e-10;

/// Z-Score based anomaly detector.
///
/// Flags samples whose distance from the mean exceeds `threshold` standard
/// deviations, with a `Critical` tier past `critical_threshold`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZScoreDetector {
    threshold: f64,
    critical_threshold: f64,
    mean: f64,
    std_dev: f64,
    fitted: bool,
}

impl ZScoreDetector {
    /// Create a detector with the given outlier threshold and the default
    /// critical tier.
    pub fn new(threshold: f64) -> Self {
        Self::from_config(ZScoreConfig::new(threshold))
    }

    /// Create from configuration.
    pub fn from_config(config: ZScoreConfig) -> Self {
        Self {
            threshold: config.threshold,
            critical_threshold: config.critical_threshold,
            mean: 0.0,
            std_dev: 1.0,
            fitted: false,
        }
    }

    /// Get the outlier threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Get the fitted mean.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Get the fitted standard deviation (after flooring).
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    fn severity_of(&self, z: f64) -> Severity {
        if z > self.critical_threshold {
            Severity::Critical
        } else {
            Severity::High
        }
    }
}

impl Default for ZScoreDetector {
    fn default() -> Self {
        Self::from_config(ZScoreConfig::default())
    }
}

impl AnomalyDetector for ZScoreDetector {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        if data.len() < 2 {
            return Err(AnomalyError::InsufficientData {
                required: 2,
                got: data.len(),
            });
        }

        let n = data.len() as f64;
        self.mean = data.iter().sum::<f64>() / n;
        let variance = data.iter().map(|x| (x - self.mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();
        self.std_dev = if std_dev > STD_FLOOR { std_dev } else { 1.0 };
        self.fitted = true;
        Ok(())
    }

    fn detect(&self, data: &[f64]) -> Result<DetectionReport> {
        let scores = self.score(data)?;

        let anomalies: Vec<Anomaly> = data
            .iter()
            .zip(scores.iter())
            .enumerate()
            .filter(|(_, (_, &z))| z > self.threshold)
            .map(|(index, (&value, &z))| Anomaly {
                index,
                value,
                z_score: z,
                severity: self.severity_of(z),
            })
            .collect();

        Ok(DetectionReport::new(anomalies, self.threshold))
    }

    fn score(&self, data: &[f64]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(AnomalyError::NotFitted);
        }
        Ok(data
            .iter()
            .map(|&x| ((x - self.mean) / self.std_dev).abs())
            .collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

/// Scan a sequence for outliers against its own statistics, with defaults.
pub fn scan(data: &[f64]) -> DetectionReport {
    scan_with(data, &ZScoreConfig::default())
}

/// Scan a sequence for outliers against its own statistics.
///
/// One-shot fit-and-detect. Sequences of fewer than 2 samples, and any
/// internal detection failure, degrade to an empty low-risk report rather
/// than an error; a bad batch must never stop the surrounding pipeline.
pub fn scan_with(data: &[f64], config: &ZScoreConfig) -> DetectionReport {
    if data.len() < 2 {
        return DetectionReport::empty(config.threshold);
    }

    let mut detector = ZScoreDetector::from_config(*config);
    if detector.fit(data).is_err() {
        return DetectionReport::empty(config.threshold);
    }
    detector
        .detect(data)
        .unwrap_or_else(|_| DetectionReport::empty(config.threshold))
}
