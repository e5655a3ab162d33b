#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// the coarse-to-fine driver.
pub mod coarse_to_fine;

/// conversion of input samples to floating point.
pub mod dtype;

/// Error types for the flow module.
pub mod error;

/// dense motion field representation.
pub mod field;

/// image pyramids of image pairs.
pub mod pyramid;

/// the per-level solver interface.
pub mod solver;

/// flow field rescaling between pyramid levels.
pub mod upscale;

/// color coding of flow fields.
pub mod viz;

pub use crate::coarse_to_fine::{coarse_to_fine, CoarseToFineParams};
pub use crate::dtype::{to_canonical_float, CanonicalFloat};
pub use crate::error::FlowError;
pub use crate::field::FlowField;
pub use crate::pyramid::{get_pyramid, ImagePyramid};
pub use crate::solver::FlowSolver;
pub use crate::upscale::upscale_flow;
pub use crate::viz::{flow_to_color, flow_to_middlebury_color, ColorCodeParams};
