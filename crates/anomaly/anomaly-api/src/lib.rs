//! Anomaly Detection API
//!
//! Configuration types for anomaly detection.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use anomaly_spi::{
    Anomaly, AnomalyDetector, AnomalyError, DetectionReport, Result, RiskLevel, Severity,
};

/// Z-Score detector configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ZScoreConfig {
    /// Z-score magnitude past which a sample is an outlier (default: 3.0).
    pub threshold: f64,
    /// Z-score magnitude past which an outlier is critical (default: 5.0).
    pub critical_threshold: f64,
}

impl Default for ZScoreConfig {
    fn default() -> Self {
        Self {
            threshold: 3.0,
            critical_threshold: 5.0,
        }
    }
}

impl ZScoreConfig {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }
}
