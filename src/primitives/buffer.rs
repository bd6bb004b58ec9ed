//! Fallible buffer allocation for the spline solver.
//!
//! ## Purpose
//!
//! This module provides the allocation primitive used by the tridiagonal
//! solver for its output and scratch arrays. Allocation is fallible: an
//! out-of-memory condition surfaces as [`SplineError::AllocationFailure`]
//! instead of aborting the process.
//!
//! ## Design notes
//!
//! * **Fallible**: Uses `Vec::try_reserve_exact` so capacity overflow and
//!   allocator failure both map to the same error.
//! * **Scoped ownership**: Buffers returned here are owned by the solver for
//!   the duration of one call and dropped on every exit path.
//!
//! ## Invariants
//!
//! * A returned vector has exactly `len` elements, all zero.
//! * On error, nothing was allocated that outlives the call.
//!
//! ## Non-goals
//!
//! * This module does not recycle buffers across calls; the solver runs once
//!   per spline and its scratch is not on the evaluation hot path.

// External dependencies
use num_traits::Zero;

// Internal dependencies
use crate::primitives::errors::SplineError;

// ============================================================================
// Allocation
// ============================================================================

/// Allocate a zeroed vector of `len` elements, failing softly.
///
/// This is the Rust counterpart of the original solver's checked `malloc`:
/// the only explicit failure the builder can produce.
#[inline]
pub fn try_zeroed<T: Zero + Clone>(len: usize) -> Result<Vec<T>, SplineError> {
    let mut buf: Vec<T> = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| SplineError::AllocationFailure { len })?;
    buf.resize(len, T::zero());
    Ok(buf)
}

// ============================================================================
// Tests
// ============================================================================
