//! # ingest
//!
//! Turns free-form numeric text into clean sample sequences for analysis.
//!
//! Input is whitespace/comma-delimited and may carry bracket characters and
//! missing-value markers (`NULL`, `NA`, `-`, ...). Parsing never fails: bad
//! tokens are counted and discarded, and "no valid data" is an empty outcome
//! rather than an error or a sentinel value.

pub mod batch;
pub mod cleaner;
pub mod tokenizer;

pub use batch::{batch_count, split_batches, Batch};
pub use cleaner::{clean, MAX_MAGNITUDE};
pub use tokenizer::{parse, ParseOutcome};
