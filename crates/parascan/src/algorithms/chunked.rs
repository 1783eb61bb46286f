//! Chunked prefix-scan building blocks
//!
//! The parallel ordered scan runs in three phases:
//!
//! 1. Split the input into chunks and scan each chunk in place (parallel).
//! 2. Running-fold the chunk totals into per-chunk offsets (sequential,
//!    O(chunks)).
//! 3. Combine each chunk element with its chunk offset (parallel).
//!
//! Only associativity of the combiner is assumed: phase 3 rewrites
//! `op(in[0..chunk_start]) ∘ op(chunk[0..=i])` as `op(offset, local[i])`,
//! which is exactly the re-association an ordered prefix permits. The first
//! chunk carries no offset, so no identity element is required.

use crate::config::EngineConfig;
use crate::Combiner;

/// Derive the chunk length for an input.
///
/// Targets `workers * chunks_per_worker` chunks so stragglers can be stolen,
/// floored at `min_chunk_len` so tiny chunks never dominate.
pub fn chunk_len(input_len: usize, workers: usize, config: &EngineConfig) -> usize {
    let target_chunks = workers.max(1) * config.chunks_per_worker.max(1);
    let len = input_len.div_ceil(target_chunks);
    len.max(config.min_chunk_len).max(1)
}

/// In-place inclusive scan of one chunk.
///
/// Returns the chunk total (the last element after the scan), or `None` for
/// an empty chunk.
pub fn local_scan(chunk: &mut [i64], op: Combiner<'_>) -> Option<i64> {
    let mut acc: Option<i64> = None;
    for value in chunk.iter_mut() {
        let next = match acc {
            Some(prev) => op(prev, *value),
            None => *value,
        };
        *value = next;
        acc = Some(next);
    }
    acc
}

/// Running-fold chunk totals into per-chunk offsets.
///
/// `offsets[0]` is `None` (the first chunk is already absolute);
/// `offsets[k]` is the fold of `totals[0..k]`.
pub fn chunk_offsets(totals: &[i64], op: Combiner<'_>) -> Vec<Option<i64>> {
    let mut offsets = Vec::with_capacity(totals.len());
    let mut running: Option<i64> = None;
    for &total in totals {
        offsets.push(running);
        running = Some(match running {
            Some(prev) => op(prev, total),
            None => total,
        });
    }
    offsets
}

/// Combine every element of a locally-scanned chunk with its chunk offset.
pub fn apply_offset(chunk: &mut [i64], offset: i64, op: Combiner<'_>) {
    for value in chunk.iter_mut() {
        *value = op(offset, *value);
    }
}
