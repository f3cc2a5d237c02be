//! Trend fitting error types.

use thiserror::Error;

/// Errors that can occur during trend fitting and selection.
#[derive(Error, Debug)]
pub enum TrendError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Model has not been fitted yet
    #[error("Model not fitted: call fit() before predicting")]
    NotFitted,

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Exponential fitting requires strictly positive values
    #[error("Non-positive data: exponential fit requires strictly positive values")]
    NonPositiveData,

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_insufficient_data_display() {
        let error = TrendError::InsufficientData {
            required: 3,
            actual: 2,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 3 points, got 2"
        );
    }

    #[test]
    fn test_not_fitted_display() {
        assert_eq!(
            TrendError::NotFitted.to_string(),
            "Model not fitted: call fit() before predicting"
        );
    }

    #[test]
    fn test_invalid_parameter_display() {
        let error = TrendError::InvalidParameter {
            name: "epsilon".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'epsilon': must be positive"
        );
    }

    #[test]
    fn test_non_positive_data_display() {
        assert!(TrendError::NonPositiveData
            .to_string()
            .contains("strictly positive"));
    }

    #[test]
    fn test_numerical_error_display() {
        let error = TrendError::NumericalError("log overflow".to_string());
        assert_eq!(error.to_string(), "Numerical error: log overflow");
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn Error> = Box::new(TrendError::NotFitted);
        assert!(error.source().is_none());
    }

    #[test]
    fn test_all_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TrendError>();
    }
}
