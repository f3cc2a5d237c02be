//! Batch slicing of a parsed sample stream.

/// One bounded chunk of the parsed sample sequence.
///
/// Batch ids are 1-based. Parse-stage rejects are not batch-aware, so they
/// are attributed to batch 1 only.
#[derive(Debug, Clone, Copy)]
pub struct Batch<'a> {
    /// 1-based batch identifier.
    pub id: usize,
    /// Raw (not yet re-cleaned) samples for this batch.
    pub values: &'a [f64],
    /// Parse-stage rejected-token count attributed to this batch.
    pub parse_rejected: usize,
}

/// Number of batches needed for `n` samples at the given batch size.
pub fn batch_count(n: usize, batch_size: usize) -> usize {
    let size = batch_size.max(1);
    ((n + size - 1) / size).max(1)
}

/// Split a sample sequence into fixed-size batches (last may be shorter).
pub fn split_batches(values: &[f64], batch_size: usize, parse_rejected: usize) -> Vec<Batch<'_>> {
    let size = batch_size.max(1);
    values
        .chunks(size)
        .enumerate()
        .map(|(i, chunk)| Batch {
            id: i + 1,
            values: chunk,
            parse_rejected: if i == 0 { parse_rejected } else { 0 },
        })
        .collect()
}
