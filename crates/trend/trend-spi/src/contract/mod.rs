//! Contract module containing trait definitions for trend operations

mod trend_model;

pub use trend_model::TrendModel;
