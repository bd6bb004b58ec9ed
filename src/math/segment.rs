//! Per-segment cubic polynomial evaluation.
//!
//! ## Purpose
//!
//! This module evaluates the spline on a single resolved interval. Given the
//! bracketing knot index and the precomputed second derivatives, it computes
//! the cubic value in barycentric form.
//!
//! ## Design notes
//!
//! * **Pure**: No state, no search; interval location lives in `algorithms`.
//! * **Identical across strategies**: Every search strategy funnels into this
//!   one formula, which is what makes strategy choice output-invariant.
//!
//! ## Invariants
//!
//! * `klo <= x.len() - 2`, so `klo + 1` is always in bounds.
//! * `x[klo] < x[klo + 1]` (strictly increasing knots, caller contract).
//!
//! ## Non-goals
//!
//! * This module does not locate intervals or reject out-of-domain queries;
//!   queries beyond the knot range yield an extrapolated cubic value.

// External dependencies
use num_traits::Float;

// ============================================================================
// Segment Evaluation
// ============================================================================

/// Evaluate the spline at `q` on the interval `[x[klo], x[klo + 1]]`.
///
/// Computes `a*y[klo] + b*y[khi] + ((a³-a)*y2[klo] + (b³-b)*y2[khi])*h²/6`
/// where `a` and `b` are the barycentric weights of `q` in the interval.
#[inline]
pub fn segment_value<T: Float>(x: &[T], y: &[T], y2: &[T], klo: usize, q: T) -> T {
    let six = T::from(6.0).unwrap();
    let khi = klo + 1;

    let h = x[khi] - x[klo];
    let a = (x[khi] - q) / h;
    let b = (q - x[klo]) / h;

    a * y[klo]
        + b * y[khi]
        + ((a * a * a - a) * y2[klo] + (b * b * b - b) * y2[khi]) * (h * h) / six
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_curvature_reduces_to_linear_interpolation() {
        let x = vec![0.0, 1.0, 2.0];
        let y = vec![0.0, 1.0, 2.0];
        let y2 = vec![0.0; 3];
        assert!((segment_value(&x, &y, &y2, 0, 0.5) - 0.5).abs() < 1e-12);
        assert!((segment_value(&x, &y, &y2, 1, 1.5) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn exact_at_both_interval_endpoints() {
        let x = vec![1.0, 3.0];
        let y = vec![-2.0, 7.0];
        let y2 = vec![0.4, -0.9];
        // The (a³-a) and (b³-b) terms vanish at the endpoints regardless of y2.
        assert!((segment_value(&x, &y, &y2, 0, 1.0) - -2.0).abs() < 1e-12);
        assert!((segment_value(&x, &y, &y2, 0, 3.0) - 7.0).abs() < 1e-12);
    }
}
