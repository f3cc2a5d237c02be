//! Model module containing data structures

mod model_kind;
mod model_params;
mod trend_fit;

pub use model_kind::ModelKind;
pub use model_params::ModelParams;
pub use trend_fit::{CandidateScore, TrendFit};
