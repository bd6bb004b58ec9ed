//! # mnspline — parallel natural cubic spline interpolation
//!
//! Natural cubic spline interpolation for batches of query points, with
//! multi-threaded evaluation and cached interval search.
//!
//! Given strictly increasing knots `x` and values `y`, the crate solves the
//! standard natural-spline tridiagonal system once for the per-knot second
//! derivatives, then evaluates the piecewise cubic at arbitrarily many query
//! points in parallel. Each worker keeps a private cursor over the knot
//! intervals so that spatially clustered queries avoid redundant searches.
//!
//! ## Quick Start
//!
//! ```rust
//! use mnspline::prelude::*;
//!
//! let x: Vec<f64> = (1..=10).map(|i| i as f64).collect();
//! let y: Vec<f64> = x.iter().map(|&v| v.sin()).collect();
//!
//! // Fit once; the model is immutable and reusable.
//! let model = Spline::new()
//!     .strategy(CachedBisection)
//!     .fit(&x, &y)?;
//!
//! // Evaluate a batch; output is index-aligned with the queries.
//! let queries = vec![1.5, 2.5, 3.5];
//! let values = model.evaluate(&queries);
//! assert_eq!(values.len(), queries.len());
//! # Result::<(), SplineError>::Ok(())
//! ```
//!
//! ## Strategies
//!
//! Two interval-location strategies are available; they differ only in search
//! cost, never in the numeric result:
//!
//! * `LinearProbe` — forward scan from the cursor, O(1) when successive
//!   queries land in the same or the next interval, with a bisection fallback
//!   on a miss. Best for sorted or clustered queries.
//! * `CachedBisection` — bracket test against the cursor, then a directed
//!   bisection over the miss side. Robust for arbitrary query order; the
//!   default.
//!
//! ## Contracts
//!
//! * Knots must be strictly increasing and `n >= 2`. Shape violations are
//!   rejected by `fit`; monotonicity and finiteness checks are opt-in via
//!   `.validate(true)` and otherwise remain caller contracts.
//! * Queries outside `[x[0], x[n-1]]` silently extrapolate using the nearest
//!   boundary interval.
//! * Evaluation is deterministic: identical inputs produce identical outputs
//!   for any strategy, worker count, or chunking.
//!
//! ## References
//!
//! - Press, W. H. et al., *Numerical Recipes in C*, 2nd ed., §3.3
//!   "Cubic Spline Interpolation".

// Layer 1: Primitives - error types and fallible allocation.
pub mod primitives;

// Layer 2: Math - tridiagonal solve and segment evaluation.
pub mod math;

// Layer 3: Algorithms - interval location strategies.
pub mod algorithms;

// Layer 4: Engine - batch execution and validation.
pub mod engine;

// High-level fluent API.
mod api;

pub use algorithms::locate::SearchStrategy;
pub use api::{interpolate, SplineBuilder, SplineModel};
pub use primitives::errors::SplineError;

// Standard prelude.
pub mod prelude {
    pub use crate::algorithms::locate::SearchStrategy;
    pub use crate::algorithms::locate::SearchStrategy::{CachedBisection, LinearProbe};
    pub use crate::api::{interpolate, SplineBuilder as Spline, SplineModel};
    pub use crate::primitives::errors::SplineError;
}
