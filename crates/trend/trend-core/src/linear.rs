//! Linear trend model.

use crate::least_squares::least_squares_with;
use serde::{Deserialize, Serialize};
use trend_api::SelectionConfig;
use trend_spi::{ModelKind, ModelParams, Result, TrendError, TrendModel};

/// Linear trend fitted by ordinary least squares against the sample index.
///
/// Fits y = slope * n + intercept where n is the index 0..len-1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearTrend {
    config: SelectionConfig,
    slope: f64,
    intercept: f64,
    r_squared: f64,
    fitted: bool,
}

impl LinearTrend {
    pub fn new() -> Self {
        Self::with_config(SelectionConfig::default())
    }

    pub fn with_config(config: SelectionConfig) -> Self {
        Self {
            config,
            slope: 0.0,
            intercept: 0.0,
            r_squared: 0.0,
            fitted: false,
        }
    }

    /// Get the fitted slope.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Get the fitted intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Default for LinearTrend {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendModel for LinearTrend {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        let x: Vec<f64> = (0..data.len()).map(|i| i as f64).collect();
        let fit = least_squares_with(&x, data, &self.config)?;

        self.slope = fit.slope;
        self.intercept = fit.intercept;
        self.r_squared = fit.r_squared;
        self.fitted = true;
        Ok(())
    }

    fn predict_at(&self, pos: f64) -> Result<f64> {
        if !self.fitted {
            return Err(TrendError::NotFitted);
        }
        Ok(self.slope * pos + self.intercept)
    }

    fn score(&self) -> f64 {
        self.r_squared
    }

    fn params(&self) -> Result<ModelParams> {
        if !self.fitted {
            return Err(TrendError::NotFitted);
        }
        Ok(ModelParams::Linear {
            slope: self.slope,
            intercept: self.intercept,
        })
    }

    fn kind(&self) -> ModelKind {
        ModelKind::Linear
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_perfect_line() {
        let data: Vec<f64> = (0..10).map(|i| 2.0 * i as f64 + 1.0).collect();
        let mut model = LinearTrend::new();
        model.fit(&data).unwrap();

        assert!((model.slope() - 2.0).abs() < 1e-10);
        assert!((model.intercept() - 1.0).abs() < 1e-10);
        assert!((model.score() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_predict_at_extends_trend() {
        let data: Vec<f64> = (0..10).map(|i| 2.0 * i as f64 + 1.0).collect();
        let mut model = LinearTrend::new();
        model.fit(&data).unwrap();

        assert!((model.predict_at(100.0).unwrap() - 201.0).abs() < 1e-9);
    }

    #[test]
    fn test_not_fitted_errors() {
        let model = LinearTrend::new();
        assert!(matches!(model.predict_at(0.0), Err(TrendError::NotFitted)));
        assert!(model.params().is_err());
        assert!(!model.is_fitted());
    }

    #[test]
    fn test_params_variant() {
        let mut model = LinearTrend::new();
        model.fit(&[1.0, 2.0, 3.0]).unwrap();
        assert!(matches!(
            model.params().unwrap(),
            ModelParams::Linear { .. }
        ));
    }
}
