//! Pixel interpolation methods for image transformations.
//!
//! This module provides the interpolation kernels used when resampling
//! images during resizing, pyramid reduction and flow warping.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: uses the nearest pixel value, keeps discontinuities intact
//! - **Bilinear**: smooth linear interpolation between adjacent pixels
//!
//! Samples falling outside the image are resolved with a [`crate::border::BorderMode`].

mod bilinear;

/// Grid generation and coordinate mapping utilities.
///
/// Functions for generating coordinate meshgrids used in image warping.
pub mod grid;

pub(crate) mod interpolate;
mod nearest;

pub use interpolate::interpolate_pixel;
pub use interpolate::InterpolationMode;
