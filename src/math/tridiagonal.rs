//! Second-derivative construction for natural cubic splines.
//!
//! ## Purpose
//!
//! This module solves the tridiagonal linear system that yields the spline's
//! per-knot second derivatives. It runs once per `(x, y)` data set; the
//! resulting array is immutable and shared by any number of evaluation calls.
//!
//! ## Design notes
//!
//! * **Thomas algorithm**: Forward elimination followed by back-substitution,
//!   O(n) time, one scratch array of length n−1.
//! * **Natural boundary**: Second derivative is pinned to zero at both ends.
//! * **Sequential by necessity**: Both sweeps carry a dependency between
//!   consecutive indices; there is nothing to parallelize here.
//! * **Generics**: Generic over `Float` types; `f64` is the tested precision.
//!
//! ## Invariants
//!
//! * Input x-values are strictly increasing (caller contract, unchecked here).
//! * `x.len() == y.len() >= 2` (caller contract, enforced by the API layer).
//! * The returned array has `y2[0] == y2[n-1] == 0`.
//!
//! ## Non-goals
//!
//! * This module does not validate its inputs (handled by `validator`).
//! * This module does not support clamped or not-a-knot boundary conditions.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::buffer::try_zeroed;
use crate::primitives::errors::SplineError;

// ============================================================================
// Second-Derivative Solve
// ============================================================================

/// Compute the second derivatives of the natural interpolating spline.
///
/// Returns one second derivative per knot. The only failure mode is an
/// allocation failure for the output or scratch array, in which case no
/// partial result is produced.
pub fn second_derivatives<T: Float>(x: &[T], y: &[T]) -> Result<Vec<T>, SplineError> {
    let n = x.len();
    debug_assert!(n >= 2 && y.len() == n);

    let two = T::from(2.0).unwrap();
    let six = T::from(6.0).unwrap();

    let mut y2: Vec<T> = try_zeroed(n)?;
    // Scratch for the decomposed right-hand side, dropped on every exit path.
    let mut u: Vec<T> = try_zeroed(n - 1)?;

    // Natural boundary at the left end: zero curvature.
    y2[0] = T::zero();
    u[0] = T::zero();

    // Forward elimination over the interior knots.
    for i in 1..n - 1 {
        let sig = (x[i] - x[i - 1]) / (x[i + 1] - x[i - 1]);
        let p = sig * y2[i - 1] + two;
        y2[i] = (sig - T::one()) / p;

        let d = (y[i + 1] - y[i]) / (x[i + 1] - x[i]) - (y[i] - y[i - 1]) / (x[i] - x[i - 1]);
        u[i] = (six * d / (x[i + 1] - x[i - 1]) - sig * u[i - 1]) / p;
    }

    // Natural boundary at the right end (qn = un = 0).
    y2[n - 1] = T::zero();

    // Back-substitution.
    for k in (0..n - 1).rev() {
        y2[k] = y2[k] * y2[k + 1] + u[k];
    }

    Ok(y2)
}

// ============================================================================
// Tests
// ============================================================================
