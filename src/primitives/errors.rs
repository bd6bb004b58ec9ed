//! Error types for spline construction.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building a
//! natural cubic spline: allocation failure for the solver's scratch buffer,
//! malformed input shapes, and (opt-in) data-quality violations.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (lengths, indices).
//! * **Construction-only**: Evaluation never fails; every variant here is
//!   produced during `fit` or the low-level builder.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Key concepts
//!
//! 1. **Allocation failure**: The scratch buffer for the tridiagonal solve
//!    could not be obtained. Fatal for that call; no partial output exists.
//! 2. **Shape validation**: Empty arrays, mismatched lengths, fewer than two
//!    knots.
//! 3. **Data validation** (opt-in): Non-finite values, non-increasing knots.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use std::error::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for spline construction.
#[derive(Debug, Clone, PartialEq)]
pub enum SplineError {
    /// The scratch buffer for the tridiagonal solve could not be allocated.
    AllocationFailure {
        /// Number of elements that could not be allocated.
        len: usize,
    },

    /// Input arrays are empty; a spline requires at least 2 knots.
    EmptyInput,

    /// Knot and value arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the knot array.
        x_len: usize,
        /// Number of elements in the value array.
        y_len: usize,
    },

    /// Number of knots is below the minimum for cubic spline interpolation.
    TooFewPoints {
        /// Number of knots provided.
        got: usize,
        /// Minimum required knots.
        min: usize,
    },

    /// Input data contains NaN or infinite values (opt-in validation).
    InvalidNumericValue(String),

    /// Knots are not strictly increasing (opt-in validation).
    NonIncreasingKnots {
        /// Index `i` where `x[i] >= x[i+1]`.
        index: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SplineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::AllocationFailure { len } => {
                write!(f, "Failed to allocate scratch buffer of {len} elements")
            }
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few knots: got {got}, need at least {min}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::NonIncreasingKnots { index } => {
                write!(f, "Knots must be strictly increasing: violated at index {index}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for SplineError {}
