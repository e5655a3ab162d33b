use crate::{error::FlowError, field::FlowField};
use pyrflow_image::GrayImage;

/// A per-level optical flow solver.
///
/// Given two images of the same size and an initial flow estimate of that
/// size, a solver returns a refined estimate of the same size. The
/// coarse-to-fine driver calls it once per pyramid level, starting from an
/// all-zero flow at the coarsest level, and makes no assumption about the
/// algorithm behind it.
///
/// Errors raised by the solver reach the caller of the driver unchanged; the
/// errors of the driver itself are converted into the solver error type.
///
/// Closures `FnMut(&GrayImage, &GrayImage, FlowField) -> Result<FlowField, FlowError>`
/// implement this trait.
///
/// # Example
///
/// ```
/// use pyrflow_flow::{FlowError, FlowField, FlowSolver};
/// use pyrflow_image::GrayImage;
///
/// struct Identity;
///
/// impl FlowSolver for Identity {
///     type Error = FlowError;
///
///     fn solve(
///         &mut self,
///         _i0: &GrayImage,
///         _i1: &GrayImage,
///         flow: FlowField,
///     ) -> Result<FlowField, FlowError> {
///         Ok(flow)
///     }
/// }
/// ```
pub trait FlowSolver {
    /// The error returned by the solver.
    type Error: From<FlowError>;

    /// Refine `flow`, an estimate of the motion from `i0` to `i1`.
    fn solve(
        &mut self,
        i0: &GrayImage,
        i1: &GrayImage,
        flow: FlowField,
    ) -> Result<FlowField, Self::Error>;
}

impl<F> FlowSolver for F
where
    F: FnMut(&GrayImage, &GrayImage, FlowField) -> Result<FlowField, FlowError>,
{
    type Error = FlowError;

    fn solve(
        &mut self,
        i0: &GrayImage,
        i1: &GrayImage,
        flow: FlowField,
    ) -> Result<FlowField, FlowError> {
        self(i0, i1, flow)
    }
}
