//! Ordinary least squares line fitting.

use trend_api::SelectionConfig;
use trend_spi::{Result, TrendError};

/// A fitted line with its goodness of fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
    /// R-squared in [0, 1]; 0.5 by convention for near-constant data.
    pub r_squared: f64,
}

/// Fit a least-squares line through paired sequences with default conventions.
pub fn least_squares(x: &[f64], y: &[f64]) -> Result<LineFit> {
    least_squares_with(x, y, &SelectionConfig::default())
}

/// Fit a least-squares line through paired sequences.
///
/// Degenerate cases are reported, not failed: a near-constant x forces the
/// slope to 0, and a near-constant y yields `flat_score` (0.5) rather than a
/// false perfect fit. R-squared is floored at 0 so a worse-than-mean fit
/// reads as "no explanatory power".
pub fn least_squares_with(x: &[f64], y: &[f64], config: &SelectionConfig) -> Result<LineFit> {
    if x.len() != y.len() {
        return Err(TrendError::InvalidParameter {
            name: "y".to_string(),
            reason: format!("length {} does not match x length {}", y.len(), x.len()),
        });
    }
    if x.is_empty() {
        return Err(TrendError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let numerator: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (xi - mean_x) * (yi - mean_y))
        .sum();
    let denominator: f64 = x.iter().map(|&xi| (xi - mean_x).powi(2)).sum();

    let slope = if denominator.abs() > config.epsilon {
        numerator / denominator
    } else {
        0.0
    };
    let intercept = mean_y - slope * mean_x;

    let ss_tot: f64 = y.iter().map(|&yi| (yi - mean_y).powi(2)).sum();
    let ss_res: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (yi - (slope * xi + intercept)).powi(2))
        .sum();

    let r_squared = if ss_tot > config.epsilon {
        (1.0 - ss_res / ss_tot).max(0.0)
    } else {
        config.flat_score
    };

    Ok(LineFit {
        slope,
        intercept,
        r_squared,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_line() {
        let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|&xi| 2.0 * xi + 1.0).collect();
        let fit = least_squares(&x, &y).unwrap();

        assert!((fit.slope - 2.0).abs() < 1e-10);
        assert!((fit.intercept - 1.0).abs() < 1e-10);
        assert!((fit.r_squared - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_constant_y_scores_half() {
        let x: Vec<f64> = (0..5).map(|i| i as f64).collect();
        let y = vec![5.0; 5];
        let fit = least_squares(&x, &y).unwrap();

        assert_eq!(fit.slope, 0.0);
        assert!((fit.intercept - 5.0).abs() < 1e-10);
        assert_eq!(fit.r_squared, 0.5);
    }

    #[test]
    fn test_constant_x_forces_zero_slope() {
        let x = vec![3.0; 4];
        let y = vec![1.0, 2.0, 3.0, 4.0];
        let fit = least_squares(&x, &y).unwrap();

        assert_eq!(fit.slope, 0.0);
        assert!((fit.intercept - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_r_squared_floored_at_zero() {
        // y deliberately anti-correlated with any line through its mean
        let x = vec![0.0, 1.0, 2.0, 3.0];
        let y = vec![1.0, -1.0, 1.0, -1.0];
        let fit = least_squares(&x, &y).unwrap();
        assert!(fit.r_squared >= 0.0);
    }

    #[test]
    fn test_single_point() {
        let fit = least_squares(&[0.0], &[7.0]).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 7.0);
        assert_eq!(fit.r_squared, 0.5);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let result = least_squares(&[0.0, 1.0], &[1.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_rejected() {
        let result = least_squares(&[], &[]);
        assert!(matches!(
            result,
            Err(trend_spi::TrendError::InsufficientData { .. })
        ));
    }
}
