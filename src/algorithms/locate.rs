//! Interval location over sorted knots.
//!
//! ## Purpose
//!
//! This module finds, for a query value `q`, the index `klo` of the knot
//! interval that brackets it: `x[klo] <= q < x[klo + 1]`. Two interchangeable
//! strategies are provided, both funneling into the same bisection primitive,
//! plus the per-worker cursor that caches the most recent result.
//!
//! ## Design notes
//!
//! * **Half-open contract**: A query equal to a knot resolves to the interval
//!   starting at that knot; a query at or beyond the last knot resolves to
//!   the final interval (`klo = n - 2`), keeping `klo + 1` in bounds.
//! * **Cursor locality**: Successive queries are often close together; the
//!   cursor turns that locality into O(1) lookups for both strategies.
//! * **Output-invariant**: Strategy choice changes search cost only; the
//!   resolved interval, and therefore the spline value, is identical.
//!
//! ## Key concepts
//!
//! * **BisectionSearch**: Range halving, O(log(hi − lo)).
//! * **LinearProbe**: Forward scan from the cursor, O(1) best case, with a
//!   full-range bisection fallback on a miss.
//! * **CachedBisection**: Bracket test against the cursor, then a directed
//!   bisection over the half-range on the miss side.
//!
//! ## Invariants
//!
//! * Knots are strictly increasing (caller contract, unchecked).
//! * A returned index is always in `0..=n-2`.
//! * The cursor is private to one worker; it is never shared across threads.
//!
//! ## Non-goals
//!
//! * This module does not reject out-of-domain queries; below-range queries
//!   resolve to interval 0 and above-range queries to interval n − 2.

// External dependencies
use num_traits::Float;

// ============================================================================
// Search Strategy
// ============================================================================

/// Interval-location strategy for batched evaluation.
///
/// Chosen once per evaluation call and threaded through as configuration;
/// never inferred dynamically per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Forward scan from the cursor with a bisection fallback on a miss.
    ///
    /// Fastest when queries are sorted or tightly clustered.
    LinearProbe,

    /// Bracket test against the cursor, then directed bisection.
    ///
    /// Robust for arbitrary query order; this is the default.
    #[default]
    CachedBisection,
}

impl SearchStrategy {
    /// Convert from the integer selector used by host bindings.
    ///
    /// `0` selects `LinearProbe`, anything else `CachedBisection`.
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::LinearProbe,
            _ => Self::CachedBisection,
        }
    }

    /// Convert to the integer selector used by host bindings.
    #[inline]
    pub fn to_u8(self) -> u8 {
        match self {
            Self::LinearProbe => 0,
            Self::CachedBisection => 1,
        }
    }
}

// ============================================================================
// Cursor
// ============================================================================

/// Per-worker cache of the most recently resolved interval index.
///
/// Ephemeral state scoped to one worker's share of one evaluation call.
/// Sharing a cursor across workers would let a stale bracket from another
/// chunk resolve a query to the wrong interval, so each worker initializes
/// its own.
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    /// Lower index of the last resolved interval.
    pub klo: usize,
}

impl Cursor {
    /// A fresh cursor positioned at the first interval.
    #[inline]
    pub fn new() -> Self {
        Self { klo: 0 }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Search Primitives
// ============================================================================

/// Bisection search for the bracketing interval within `[lo, hi]`.
///
/// Halves the range until `hi - lo == 1` and returns `lo`. A tie at a knot
/// keeps the lower index as the interval containing the query, consistent
/// with the half-open contract.
#[inline]
pub fn bisect<T: Float>(x: &[T], q: T, mut lo: usize, mut hi: usize) -> usize {
    while hi - lo > 1 {
        let mid = lo + ((hi - lo) >> 1);
        if x[mid] > q {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    lo
}

/// Forward scan from `lo` for an interval bracketing `q`.
///
/// Returns `None` when no bracket exists in `[lo, n-1)`: the query lies
/// below `x[lo]`, at or beyond `x[n-1]`, or the scan start is already past
/// it. The caller falls back to a full-range bisection in that case.
#[inline]
pub fn linear_probe<T: Float>(x: &[T], q: T, lo: usize) -> Option<usize> {
    for i in lo..x.len() - 1 {
        if x[i] <= q && q < x[i + 1] {
            return Some(i);
        }
    }
    None
}

// ============================================================================
// Strategy Dispatch
// ============================================================================

/// Resolve the bracketing interval for `q`, using and updating the cursor.
#[inline]
pub fn locate<T: Float>(x: &[T], q: T, strategy: SearchStrategy, cursor: &mut Cursor) -> usize {
    let n = x.len();

    let klo = match strategy {
        SearchStrategy::LinearProbe => match linear_probe(x, q, cursor.klo) {
            Some(i) => i,
            None => bisect(x, q, 0, n - 1),
        },
        SearchStrategy::CachedBisection => {
            let k = cursor.klo;
            if q >= x[k + 1] {
                // At or beyond the cached bracket: search forward.
                bisect(x, q, k, n - 1)
            } else if q < x[k] {
                // Below the cached bracket: search backward.
                bisect(x, q, 0, k)
            } else {
                k
            }
        }
    };

    cursor.klo = klo;
    klo
}

// ============================================================================
// Tests
// ============================================================================
