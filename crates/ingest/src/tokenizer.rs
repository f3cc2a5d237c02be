//! Tokenizer for raw numeric text.

use serde::{Deserialize, Serialize};

/// Markers treated as missing values (matched case-insensitively).
const MISSING_MARKERS: [&str; 6] = ["NULL", "NA", "NAN", "NONE", "N/A", "-"];

/// Result of parsing a raw text blob.
///
/// An empty `values` vec means no valid data was found; callers must treat
/// that as "effectively empty" input rather than a real observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// Accepted samples, in input order. All values are finite.
    pub values: Vec<f64>,
    /// Count of tokens rejected during parsing.
    pub rejected: usize,
}

impl ParseOutcome {
    /// True when parsing produced no usable samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of accepted samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// Parse a raw text blob into a numeric sequence, counting rejected tokens.
///
/// Brackets and commas are normalized to whitespace before splitting. A token
/// is rejected when it is a missing-value marker, fails to parse, or parses
/// to a non-finite value. This never fails; worst case is an empty outcome.
pub fn parse(raw: &str) -> ParseOutcome {
    let normalized: String = raw
        .chars()
        .map(|c| match c {
            '[' | ']' | ',' => ' ',
            other => other,
        })
        .collect();

    let mut values = Vec::new();
    let mut rejected = 0;

    for token in normalized.split_whitespace() {
        if is_missing_marker(token) {
            rejected += 1;
            continue;
        }
        match token.parse::<f64>() {
            Ok(v) if v.is_finite() => values.push(v),
            _ => rejected += 1,
        }
    }

    ParseOutcome { values, rejected }
}

fn is_missing_marker(token: &str) -> bool {
    let upper = token.to_ascii_uppercase();
    MISSING_MARKERS.contains(&upper.as_str())
}
