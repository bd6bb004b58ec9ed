//! Layer 2: Math
//!
//! This layer implements the pure numerical kernels: the tridiagonal solve
//! that produces second derivatives and the per-segment cubic evaluation.
//! Nothing here performs searching, validation, or parallel orchestration.

// Second-derivative construction (Thomas-algorithm tridiagonal solve).
pub mod tridiagonal;

// Per-segment cubic polynomial evaluation.
pub mod segment;
