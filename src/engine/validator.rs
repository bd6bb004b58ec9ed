//! Input validation for spline construction.
//!
//! ## Purpose
//!
//! This module checks input shapes and, when requested, data quality before
//! the tridiagonal solve runs. The evaluation hot path performs no checks.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Two tiers**: Shape checks (lengths, minimum knots) always run during
//!   `fit`; data checks (finiteness, monotonicity) are opt-in because the
//!   original contract leaves them to the caller.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//! * A passing `validate_monotonic` guarantees strictly increasing knots.
//!
//! ## Non-goals
//!
//! * This module does not validate queries; out-of-domain queries are a
//!   documented extrapolation case, not an error.
//! * This module does not sort or correct invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SplineError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for spline input data.
///
/// All methods return `Result<(), SplineError>` and fail fast upon the first
/// violation.
pub struct Validator;

impl Validator {
    /// Validate input array shapes: non-empty, equal lengths, at least two
    /// knots. Always run by the API layer before solving.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), SplineError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(SplineError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if n != y.len() {
            return Err(SplineError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Check 3: A cubic spline needs at least two knots
        if n < 2 {
            return Err(SplineError::TooFewPoints { got: n, min: 2 });
        }

        Ok(())
    }

    /// Validate that all values are finite (no NaN/Inf). Opt-in.
    pub fn validate_finite<T: Float>(vals: &[T], name: &str) -> Result<(), SplineError> {
        for (i, &v) in vals.iter().enumerate() {
            if !v.is_finite() {
                return Err(SplineError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate that knots are strictly increasing. Opt-in.
    pub fn validate_monotonic<T: Float>(x: &[T]) -> Result<(), SplineError> {
        for i in 0..x.len().saturating_sub(1) {
            if x[i] >= x[i + 1] {
                return Err(SplineError::NonIncreasingKnots { index: i });
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
