//! Filter operations
//!
//! This module provides the smoothing and finite difference operators used
//! by the pyramid construction and by flow solvers.

/// Filter kernels
pub mod kernels;

/// Separable filter operations
mod separable_filter;
pub use separable_filter::*;

/// Finite difference operators
mod derivatives;
pub use derivatives::*;
