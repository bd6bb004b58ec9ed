//! High-level API for natural cubic spline interpolation.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point: a fluent builder that
//! configures the search strategy, parallelism, and optional data validation,
//! and a model object that owns the fitted spline and evaluates query batches.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Build once, evaluate many**: `fit` runs the tridiagonal solve once;
//!   the resulting model is immutable and can serve any number of batches.
//! * **Infallible evaluation**: All failure surfaces live in `fit`; the
//!   evaluator itself never fails.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SplineBuilder`] via `Spline::new()`.
//! 2. Chain configuration methods (`.strategy()`, `.parallel()`, `.validate()`).
//! 3. Call `.fit(&x, &y)` to validate, solve, and obtain a [`SplineModel`].

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor;
use crate::engine::validator::Validator;
use crate::math::tridiagonal::second_derivatives;

// Publicly re-exported types
pub use crate::algorithms::locate::SearchStrategy;
pub use crate::primitives::errors::SplineError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring spline construction and evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplineBuilder {
    /// Interval-location strategy used during evaluation.
    strategy: SearchStrategy,

    /// Distribute evaluation across the rayon pool (default: true).
    parallel: Option<bool>,

    /// Run opt-in data validation (finiteness, strict monotonicity) in `fit`.
    validate: bool,
}

impl SplineBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the interval-location strategy (default: `CachedBisection`).
    pub fn strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable or disable parallel evaluation (default: enabled).
    ///
    /// Only affects throughput; output is identical either way.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Enable opt-in data validation during `fit` (default: disabled).
    ///
    /// When enabled, `fit` additionally rejects non-finite values and knots
    /// that are not strictly increasing. When disabled, those remain caller
    /// contracts and violating them gives undefined numeric results, matching
    /// the unchecked hot path of the underlying algorithm.
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Validate inputs, solve for second derivatives, and build the model.
    ///
    /// Shape checks (non-empty, matching lengths, at least two knots) always
    /// run; data checks run only with `.validate(true)`. The solve itself can
    /// only fail with [`SplineError::AllocationFailure`].
    pub fn fit<T: Float + Send + Sync>(
        self,
        x: &[T],
        y: &[T],
    ) -> Result<SplineModel<T>, SplineError> {
        Validator::validate_inputs(x, y)?;

        if self.validate {
            Validator::validate_finite(x, "x")?;
            Validator::validate_finite(y, "y")?;
            Validator::validate_monotonic(x)?;
        }

        let y2 = second_derivatives(x, y)?;

        Ok(SplineModel {
            x: x.to_vec(),
            y: y.to_vec(),
            y2,
            strategy: self.strategy,
            parallel: self.parallel.unwrap_or(true),
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A fitted natural cubic spline.
///
/// Owns the knots, values, and second derivatives; immutable after `fit`.
/// Queries outside the knot range are not rejected: the nearest boundary
/// interval is used, producing an extrapolated cubic value.
#[derive(Debug, Clone)]
pub struct SplineModel<T> {
    x: Vec<T>,
    y: Vec<T>,
    y2: Vec<T>,
    strategy: SearchStrategy,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    parallel: bool,
}

impl<T: Float + Send + Sync> SplineModel<T> {
    /// Evaluate the spline at each query point.
    ///
    /// The output is index-aligned with `queries` and identical regardless of
    /// strategy, parallelism, or chunking.
    pub fn evaluate(&self, queries: &[T]) -> Vec<T> {
        let mut out = vec![T::zero(); queries.len()];
        self.evaluate_into(queries, &mut out);
        out
    }

    /// Evaluate into a caller-provided output buffer.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != queries.len()`.
    pub fn evaluate_into(&self, queries: &[T], out: &mut [T]) {
        assert_eq!(
            queries.len(),
            out.len(),
            "output buffer must match query count"
        );

        #[cfg(feature = "parallel")]
        if self.parallel {
            executor::evaluate_into_parallel(
                &self.x,
                &self.y,
                &self.y2,
                queries,
                out,
                self.strategy,
            );
            return;
        }

        executor::evaluate_into(&self.x, &self.y, &self.y2, queries, out, self.strategy);
    }

    /// The knot array.
    pub fn knots(&self) -> &[T] {
        &self.x
    }

    /// The value array.
    pub fn values(&self) -> &[T] {
        &self.y
    }

    /// The per-knot second derivatives produced by the solve.
    pub fn second_derivatives(&self) -> &[T] {
        &self.y2
    }

    /// The configured interval-location strategy.
    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }
}

// ============================================================================
// One-Shot Convenience
// ============================================================================

/// Build a spline from `(x, y)` and evaluate it at `queries` in one call.
///
/// Convenient for single batches; when evaluating many batches against the
/// same data, fit once and reuse the [`SplineModel`] to amortize the solve.
pub fn interpolate<T: Float + Send + Sync>(
    x: &[T],
    y: &[T],
    queries: &[T],
) -> Result<Vec<T>, SplineError> {
    Ok(SplineBuilder::new().fit(x, y)?.evaluate(queries))
}
