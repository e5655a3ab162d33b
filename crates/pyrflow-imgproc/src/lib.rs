#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// border handling policies for sampling outside the image.
pub mod border;

/// image filtering and finite differences module.
pub mod filter;

/// utilities for interpolation.
pub mod interpolation;

/// module containing parallization utilities.
pub mod parallel;

/// Pyramid operations
pub mod pyramid;

/// utility functions for resizing images.
pub mod resize;

/// image warping by dense motion fields.
pub mod warp;
