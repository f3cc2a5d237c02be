//! Exponential trend model.

use crate::least_squares::least_squares_with;
use serde::{Deserialize, Serialize};
use trend_api::SelectionConfig;
use trend_spi::{ModelKind, ModelParams, Result, TrendError, TrendModel};

/// Exponential trend fitted as a line in log space.
///
/// Fits ln(y) = rate * n + ln(amplitude), then back-transforms, so the
/// reported score is the R-squared of the log-linear fit. Only defined for
/// strictly positive data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExponentialTrend {
    config: SelectionConfig,
    amplitude: f64,
    rate: f64,
    r_squared: f64,
    fitted: bool,
}

impl ExponentialTrend {
    pub fn new() -> Self {
        Self::with_config(SelectionConfig::default())
    }

    pub fn with_config(config: SelectionConfig) -> Self {
        Self {
            config,
            amplitude: 0.0,
            rate: 0.0,
            r_squared: 0.0,
            fitted: false,
        }
    }

    /// Get the fitted amplitude (value at n = 0).
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Get the fitted growth rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Default for ExponentialTrend {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendModel for ExponentialTrend {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        if data.is_empty() {
            return Err(TrendError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        if data.iter().any(|&y| y <= 0.0) {
            return Err(TrendError::NonPositiveData);
        }

        let x: Vec<f64> = (0..data.len()).map(|i| i as f64).collect();
        let log_y: Vec<f64> = data.iter().map(|&y| y.ln()).collect();
        let fit = least_squares_with(&x, &log_y, &self.config)?;

        self.amplitude = fit.intercept.exp();
        self.rate = fit.slope;
        self.r_squared = fit.r_squared;
        self.fitted = true;
        Ok(())
    }

    fn predict_at(&self, pos: f64) -> Result<f64> {
        if !self.fitted {
            return Err(TrendError::NotFitted);
        }
        Ok(self.amplitude * (self.rate * pos).exp())
    }

    fn score(&self) -> f64 {
        self.r_squared
    }

    fn params(&self) -> Result<ModelParams> {
        if !self.fitted {
            return Err(TrendError::NotFitted);
        }
        Ok(ModelParams::Exponential {
            amplitude: self.amplitude,
            rate: self.rate,
        })
    }

    fn kind(&self) -> ModelKind {
        ModelKind::Exponential
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
