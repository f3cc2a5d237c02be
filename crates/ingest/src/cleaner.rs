//! Sequence cleaning for already-parsed samples.

/// Largest absolute value accepted as a real observation.
pub const MAX_MAGNITUDE: f64 = 1e15;

/// Remove non-finite and out-of-range values from a numeric sequence.
///
/// Returns the retained values and the count of removals. An empty result
/// means the sequence held no usable data; callers skip it rather than
/// treating it as an observation.
pub fn clean(data: &[f64]) -> (Vec<f64>, usize) {
    let mut kept = Vec::with_capacity(data.len());
    let mut removed = 0;

    for &v in data {
        if v.is_finite() && v.abs() <= MAX_MAGNITUDE {
            kept.push(v);
        } else {
            removed += 1;
        }
    }

    (kept, removed)
}
