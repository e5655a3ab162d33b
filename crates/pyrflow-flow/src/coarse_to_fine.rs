use log::debug;

use crate::dtype::{to_canonical_float, CanonicalFloat};
use crate::error::FlowError;
use crate::field::FlowField;
use crate::pyramid::{
    get_pyramid, validate_downscale, validate_min_size, DEFAULT_DOWNSCALE, DEFAULT_MIN_SIZE,
};
use crate::solver::FlowSolver;
use crate::upscale::upscale_flow;
use pyrflow_image::{GrayImage, Image};

/// Parameters of the coarse-to-fine driver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CoarseToFineParams {
    /// Reduction factor between two consecutive pyramid levels.
    pub downscale: f32,
    /// No coarser level is built once the smaller image dimension is at most this size.
    pub min_size: usize,
}

impl Default for CoarseToFineParams {
    fn default() -> Self {
        Self {
            downscale: DEFAULT_DOWNSCALE,
            min_size: DEFAULT_MIN_SIZE,
        }
    }
}

impl CoarseToFineParams {
    /// Check that the parameters describe a finite pyramid.
    ///
    /// # Errors
    ///
    /// [`FlowError::InvalidParameter`] if `downscale` is not a finite value
    /// greater than one or `min_size` is zero.
    pub fn validate(&self) -> Result<(), FlowError> {
        validate_downscale(self.downscale)?;
        validate_min_size(self.min_size)
    }
}

fn into_gray<const C: usize>(image: Image<f32, C>) -> Result<GrayImage, FlowError> {
    let size = image.size();
    Ok(GrayImage::new(size, image.into_vec())?)
}

fn solve_level<S: FlowSolver>(
    solver: &mut S,
    i0: &GrayImage,
    i1: &GrayImage,
    flow: FlowField,
) -> Result<FlowField, S::Error> {
    let expected = i0.size();
    let flow = solver.solve(i0, i1, flow)?;

    if flow.size() != expected {
        return Err(FlowError::SolverShape(expected, flow.size()).into());
    }

    Ok(flow)
}

/// Estimate the optical flow between two images with a multiresolution scheme.
///
/// Both images are converted to `f32` with [`to_canonical_float`] and reduced
/// into a pyramid with [`get_pyramid`]. The solver is first called on the
/// coarsest level with an all-zero flow, then on every finer level with the
/// previous estimate rescaled by [`upscale_flow`], and the estimate of the
/// original resolution is returned.
///
/// # Arguments
///
/// * `i0` - The first single channel image.
/// * `i1` - The second single channel image, same size as `i0`.
/// * `solver` - The per-level solver.
/// * `params` - The pyramid parameters.
///
/// # Returns
///
/// The flow field from `i0` to `i1` at the size of the input images.
///
/// # Errors
///
/// * [`FlowError::Dimensionality`] if the images have more than one channel.
/// * [`FlowError::ShapeMismatch`] if the images have different sizes, the
///   solver is not called in that case.
/// * [`FlowError::InvalidParameter`] if `params` is invalid.
/// * [`FlowError::SolverShape`] if the solver returns a field of the wrong size.
/// * Any error of the solver, unchanged.
///
/// # Example
///
/// ```
/// use pyrflow_flow::{coarse_to_fine, CoarseToFineParams, FlowError, FlowField};
/// use pyrflow_image::{GrayImage, Image, ImageSize};
///
/// let size = ImageSize { width: 64, height: 64 };
/// let i0 = Image::<u8, 1>::from_size_val(size, 128).unwrap();
/// let i1 = i0.clone();
///
/// let mut levels = Vec::new();
/// let mut solver = |j0: &GrayImage, _: &GrayImage, flow: FlowField| {
///     levels.push(j0.width());
///     Ok::<_, FlowError>(flow)
/// };
///
/// let flow = coarse_to_fine(&i0, &i1, &mut solver, &CoarseToFineParams::default()).unwrap();
///
/// assert_eq!(flow.size(), size);
/// assert_eq!(levels, vec![16, 32, 64]);
/// ```
pub fn coarse_to_fine<T, const C: usize, S>(
    i0: &Image<T, C>,
    i1: &Image<T, C>,
    solver: &mut S,
    params: &CoarseToFineParams,
) -> Result<FlowField, S::Error>
where
    T: CanonicalFloat,
    S: FlowSolver,
{
    if C != 1 {
        return Err(FlowError::Dimensionality(C).into());
    }

    let i0 = to_canonical_float(i0).map_err(FlowError::from)?;
    let i1 = to_canonical_float(i1).map_err(FlowError::from)?;

    let pyramid = get_pyramid(into_gray(i0)?, into_gray(i1)?, params.downscale, params.min_size)?;
    let num_levels = pyramid.len();

    let (j0, j1) = pyramid.coarsest();
    debug!("solving level 1/{} with size {}", num_levels, j0.size());
    let mut flow = solve_level(solver, j0, j1, FlowField::zeros(j0.size()))?;

    for (level, (j0, j1)) in pyramid.iter().enumerate().skip(1) {
        debug!(
            "solving level {}/{} with size {}",
            level + 1,
            num_levels,
            j0.size()
        );
        let init = upscale_flow(&flow, j0.size())?;
        flow = solve_level(solver, j0, j1, init)?;
    }

    debug!("coarse-to-fine finished over {} levels", num_levels);

    Ok(flow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyrflow_image::ImageSize;

    #[test]
    fn params_default() -> Result<(), FlowError> {
        let params = CoarseToFineParams::default();
        assert_eq!(params.downscale, 2.0);
        assert_eq!(params.min_size, 16);
        params.validate()
    }

    #[test]
    fn params_invalid() {
        for params in [
            CoarseToFineParams {
                downscale: 1.0,
                ..Default::default()
            },
            CoarseToFineParams {
                downscale: f32::NAN,
                ..Default::default()
            },
            CoarseToFineParams {
                min_size: 0,
                ..Default::default()
            },
        ] {
            assert!(matches!(
                params.validate(),
                Err(FlowError::InvalidParameter(_))
            ));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn params_serde() -> Result<(), Box<dyn std::error::Error>> {
        let params: CoarseToFineParams = serde_json::from_str(r#"{ "min_size": 8 }"#)?;
        assert_eq!(
            params,
            CoarseToFineParams {
                downscale: 2.0,
                min_size: 8
            }
        );
        Ok(())
    }

    #[test]
    fn solver_receives_upscaled_flow() -> Result<(), FlowError> {
        let size = ImageSize {
            width: 40,
            height: 20,
        };
        let i0 = GrayImage::from_size_val(size, 0.0)?;
        let i1 = GrayImage::from_size_val(size, 0.0)?;

        // each level adds one pixel of horizontal motion on top of its init
        let mut inits = Vec::new();
        let mut solver = |j0: &GrayImage, _: &GrayImage, flow: FlowField| {
            inits.push((j0.size(), flow.u().as_slice()[0]));
            let (mut u, v) = flow.into_parts();
            u.as_slice_mut().iter_mut().for_each(|val| *val += 1.0);
            FlowField::new(u, v)
        };

        let params = CoarseToFineParams {
            downscale: 2.0,
            min_size: 8,
        };
        let flow = coarse_to_fine(&i0, &i1, &mut solver, &params)?;

        assert_eq!(
            inits,
            vec![
                (ImageSize::from([10, 5]), 0.0),
                (ImageSize::from([20, 10]), 2.0),
                (ImageSize::from([40, 20]), 6.0),
            ]
        );
        assert!(flow.u().as_slice().iter().all(|&val| val == 7.0));
        assert!(flow.v().as_slice().iter().all(|&val| val == 0.0));

        Ok(())
    }

    #[test]
    fn invalid_params_before_solver() -> Result<(), FlowError> {
        let i0 = GrayImage::from_size_val([32, 32].into(), 0.0)?;
        let mut calls = 0;
        let mut solver = |_: &GrayImage, _: &GrayImage, flow: FlowField| {
            calls += 1;
            Ok::<_, FlowError>(flow)
        };

        let params = CoarseToFineParams {
            downscale: 0.5,
            min_size: 16,
        };
        let res = coarse_to_fine(&i0, &i0, &mut solver, &params);

        assert!(matches!(res, Err(FlowError::InvalidParameter(_))));
        assert_eq!(calls, 0);

        Ok(())
    }
}
