//! Layer 3: Algorithms
//!
//! This layer implements interval location over the sorted knot array: the
//! bisection and linear-probe search primitives, the per-worker cursor, and
//! the strategy type that selects between them.

// Interval location strategies and the per-worker cursor.
pub mod locate;
