//! Layer 1: Primitives
//!
//! This layer contains data structures and basic utilities with no knowledge
//! of the spline algorithm itself: error types and fallible allocation.

// Error types for spline construction.
pub mod errors;

// Fallible buffer allocation.
pub mod buffer;
