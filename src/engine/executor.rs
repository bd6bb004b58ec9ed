//! Batched spline evaluation, sequential and parallel.
//!
//! ## Purpose
//!
//! This module drives the per-query "search then evaluate" loop over a batch
//! of query points, either on the current thread or distributed across a
//! rayon worker pool. It is the only place that owns cursors.
//!
//! ## Design notes
//!
//! * **Disjoint writes**: Queries and outputs are split into aligned chunks;
//!   each worker writes only its own output chunk, so no synchronization is
//!   needed and every slot is written exactly once.
//! * **Private cursors**: Each chunk gets a freshly initialized [`Cursor`].
//!   The cursor only steers the search, never the arithmetic, which is why
//!   output is identical for any chunking, worker count, or strategy.
//! * **Chunk sizing**: Derived from the rayon pool size with a floor so small
//!   batches are not oversplit; the constant affects throughput only.
//! * **Blocking**: The whole batch completes before the call returns; there
//!   are no partial results and no cancellation.
//!
//! ## Invariants
//!
//! * Knots, values, and second derivatives are read-only for the duration of
//!   the call.
//! * `out.len() == queries.len()` (caller contract).
//!
//! ## Non-goals
//!
//! * This module does not build second derivatives (see `math::tridiagonal`).
//! * This module does not validate queries; out-of-domain values extrapolate.

// Feature-gated imports
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::locate::{locate, Cursor, SearchStrategy};
use crate::math::segment::segment_value;

/// Floor on the per-worker chunk length; below this, splitting costs more
/// than the searches it saves.
#[cfg(feature = "parallel")]
const MIN_CHUNK: usize = 1024;

// ============================================================================
// Sequential Evaluation
// ============================================================================

/// Evaluate the spline at each query on the current thread.
///
/// One cursor serves the whole batch, mirroring the per-worker state of the
/// parallel driver with a single worker.
pub fn evaluate_into<T: Float>(
    x: &[T],
    y: &[T],
    y2: &[T],
    queries: &[T],
    out: &mut [T],
    strategy: SearchStrategy,
) {
    debug_assert_eq!(queries.len(), out.len());

    let mut cursor = Cursor::new();
    for (slot, &q) in out.iter_mut().zip(queries) {
        let klo = locate(x, q, strategy, &mut cursor);
        *slot = segment_value(x, y, y2, klo, q);
    }
}

// ============================================================================
// Parallel Evaluation
// ============================================================================

/// Evaluate the spline at each query across the rayon worker pool.
///
/// Queries are partitioned into independent chunks; each chunk runs the
/// sequential loop with its own private cursor.
#[cfg(feature = "parallel")]
pub fn evaluate_into_parallel<T: Float + Send + Sync>(
    x: &[T],
    y: &[T],
    y2: &[T],
    queries: &[T],
    out: &mut [T],
    strategy: SearchStrategy,
) {
    let m = queries.len();
    let threads = rayon::current_num_threads().max(1);
    let chunk = m.div_ceil(threads).max(MIN_CHUNK);

    evaluate_into_chunked(x, y, y2, queries, out, strategy, chunk);
}

/// Parallel evaluation with an explicit chunk length.
///
/// Exposed so output invariance under chunking can be exercised directly;
/// `evaluate_into_parallel` picks the chunk length from the pool size.
#[cfg(feature = "parallel")]
pub fn evaluate_into_chunked<T: Float + Send + Sync>(
    x: &[T],
    y: &[T],
    y2: &[T],
    queries: &[T],
    out: &mut [T],
    strategy: SearchStrategy,
    chunk: usize,
) {
    debug_assert_eq!(queries.len(), out.len());
    debug_assert!(chunk > 0);

    out.par_chunks_mut(chunk)
        .zip(queries.par_chunks(chunk))
        .for_each(|(out_chunk, query_chunk)| {
            // Cursor state is per chunk; a shared cursor could hand a worker a
            // stale bracket from another chunk and silently resolve the wrong
            // interval.
            let mut cursor = Cursor::new();
            for (slot, &q) in out_chunk.iter_mut().zip(query_chunk) {
                let klo = locate(x, q, strategy, &mut cursor);
                *slot = segment_value(x, y, y2, klo, q);
            }
        });
}

// ============================================================================
// Tests
// ============================================================================
