//! Trend model implementations.
//!
//! Three candidate families are fitted against the sample index:
//!
//! - [`LinearTrend`]: ordinary least squares line
//! - [`QuadraticTrend`]: finite-difference parabola estimate
//! - [`ExponentialTrend`]: log-linear fit, back-transformed
//!
//! [`analyze`] evaluates all applicable candidates and picks the best.

mod exponential;
mod least_squares;
mod linear;
mod quadratic;
mod selection;

pub use exponential::ExponentialTrend;
pub use least_squares::{least_squares, least_squares_with, LineFit};
pub use linear::LinearTrend;
pub use quadratic::QuadraticTrend;
pub use selection::{analyze, analyze_with};
