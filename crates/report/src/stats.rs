//! Descriptive statistics over one cleaned batch.

use serde::{Deserialize, Serialize};

/// Descriptive statistics of a cleaned sample sequence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DescriptiveStats {
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// Upper median: element at index len/2 of the sorted sequence.
    pub median: f64,
    pub range: f64,
    /// Coefficient of variation as a percentage; 0 when the mean is exactly 0.
    pub cv: f64,
}

impl DescriptiveStats {
    /// Compute statistics over a sequence. Returns `None` for empty input.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let median = sorted[sorted.len() / 2];

        let cv = if mean != 0.0 {
            std_dev / mean * 100.0
        } else {
            0.0
        };

        Some(Self {
            mean,
            std_dev,
            min,
            max,
            median,
            range: max - min,
            cv,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_stats() {
        let stats = DescriptiveStats::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!((stats.mean - 3.0).abs() < 1e-12);
        assert!((stats.std_dev - 2.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.range, 4.0);
    }

    #[test]
    fn test_median_is_upper_for_even_length() {
        let stats = DescriptiveStats::from_values(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(stats.median, 3.0);
    }

    #[test]
    fn test_cv_zero_when_mean_zero() {
        let stats = DescriptiveStats::from_values(&[-1.0, 1.0]).unwrap();
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.cv, 0.0);
        assert!(stats.std_dev > 0.0);
    }

    #[test]
    fn test_cv_percentage() {
        let stats = DescriptiveStats::from_values(&[10.0, 10.0, 10.0]).unwrap();
        assert_eq!(stats.cv, 0.0);

        let stats = DescriptiveStats::from_values(&[5.0, 15.0]).unwrap();
        // mean 10, std 5 -> cv 50%
        assert!((stats.cv - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input() {
        assert!(DescriptiveStats::from_values(&[]).is_none());
    }
}
