//! Quadratic trend model.

use serde::{Deserialize, Serialize};
use trend_api::SelectionConfig;
use trend_spi::{ModelKind, ModelParams, Result, TrendError, TrendModel};

/// Quadratic trend estimated from second finite differences.
///
/// This is deliberately NOT a least-squares quadratic regression: the
/// leading coefficient comes from the mean second difference, the linear
/// coefficient from the first difference, and the constant from y[0]. The
/// estimate is cheaper but less trustworthy, which is why its degenerate
/// score convention is 0.3 instead of the least-squares 0.5. Downstream
/// numerical expectations depend on this exact formulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadraticTrend {
    config: SelectionConfig,
    a: f64,
    b: f64,
    c: f64,
    r_squared: f64,
    fitted: bool,
}

impl QuadraticTrend {
    pub fn new() -> Self {
        Self::with_config(SelectionConfig::default())
    }

    pub fn with_config(config: SelectionConfig) -> Self {
        Self {
            config,
            a: 0.0,
            b: 0.0,
            c: 0.0,
            r_squared: 0.0,
            fitted: false,
        }
    }

    /// Fitted coefficients (a, b, c) of y = a*n^2 + b*n + c.
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }
}

impl Default for QuadraticTrend {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendModel for QuadraticTrend {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        if data.len() <= 2 {
            return Err(TrendError::InsufficientData {
                required: 3,
                actual: data.len(),
            });
        }

        let d1: Vec<f64> = data.windows(2).map(|w| w[1] - w[0]).collect();
        let d2: Vec<f64> = d1.windows(2).map(|w| w[1] - w[0]).collect();

        self.a = if d2.is_empty() {
            0.0
        } else {
            d2.iter().sum::<f64>() / (2.0 * d2.len() as f64)
        };
        self.b = d1.first().copied().unwrap_or(0.0) - self.a;
        self.c = data[0];

        let n = data.len() as f64;
        let mean_y = data.iter().sum::<f64>() / n;
        let ss_tot: f64 = data.iter().map(|&y| (y - mean_y).powi(2)).sum();
        let ss_res: f64 = data
            .iter()
            .enumerate()
            .map(|(i, &y)| {
                let t = i as f64;
                let predicted = self.a * t * t + self.b * t + self.c;
                (y - predicted).powi(2)
            })
            .sum();

        self.r_squared = if ss_tot > self.config.epsilon {
            (1.0 - ss_res / ss_tot).max(0.0)
        } else {
            self.config.flat_quadratic_score
        };

        self.fitted = true;
        Ok(())
    }

    fn predict_at(&self, pos: f64) -> Result<f64> {
        if !self.fitted {
            return Err(TrendError::NotFitted);
        }
        Ok(self.a * pos * pos + self.b * pos + self.c)
    }

    fn score(&self) -> f64 {
        self.r_squared
    }

    fn params(&self) -> Result<ModelParams> {
        if !self.fitted {
            return Err(TrendError::NotFitted);
        }
        Ok(ModelParams::Quadratic {
            a: self.a,
            b: self.b,
            c: self.c,
        })
    }

    fn kind(&self) -> ModelKind {
        ModelKind::Quadratic
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
