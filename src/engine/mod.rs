//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates batched evaluation over the math and algorithms
//! layers and validates inputs before construction.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sequential and parallel batch evaluation.
pub mod executor;

/// Validation utilities.
pub mod validator;
