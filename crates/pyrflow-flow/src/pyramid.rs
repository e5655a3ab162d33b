use log::trace;

use crate::error::FlowError;
use pyrflow_image::{Image, ImageError};
use pyrflow_imgproc::pyramid::{pyramid_reduce, reduced_size};

/// Default reduction factor between two consecutive levels.
pub const DEFAULT_DOWNSCALE: f32 = 2.0;

/// Default size below which no coarser level is built.
pub const DEFAULT_MIN_SIZE: usize = 16;

/// A matched pair of image pyramids.
///
/// Levels are ordered from the coarsest (index 0) to the original resolution
/// (last index). Both images of a level always have the same size and the
/// pyramid has at least one level.
#[derive(Clone, Debug)]
pub struct ImagePyramid<const C: usize> {
    levels: Vec<(Image<f32, C>, Image<f32, C>)>,
}

impl<const C: usize> ImagePyramid<C> {
    /// All levels, coarsest first.
    pub fn levels(&self) -> &[(Image<f32, C>, Image<f32, C>)] {
        &self.levels
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false, a pyramid holds at least the original resolution.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The smallest level.
    pub fn coarsest(&self) -> &(Image<f32, C>, Image<f32, C>) {
        &self.levels[0]
    }

    /// The original resolution level.
    pub fn finest(&self) -> &(Image<f32, C>, Image<f32, C>) {
        &self.levels[self.levels.len() - 1]
    }

    /// Iterate over the levels from coarse to fine.
    pub fn iter(&self) -> std::slice::Iter<'_, (Image<f32, C>, Image<f32, C>)> {
        self.levels.iter()
    }

    /// Consume the pyramid and return its levels, coarsest first.
    pub fn into_levels(self) -> Vec<(Image<f32, C>, Image<f32, C>)> {
        self.levels
    }
}

impl<'a, const C: usize> IntoIterator for &'a ImagePyramid<C> {
    type Item = &'a (Image<f32, C>, Image<f32, C>);
    type IntoIter = std::slice::Iter<'a, (Image<f32, C>, Image<f32, C>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}

pub(crate) fn validate_downscale(downscale: f32) -> Result<(), FlowError> {
    if !downscale.is_finite() || downscale <= 1.0 {
        return Err(FlowError::InvalidParameter(format!(
            "downscale must be a finite value greater than 1, got {downscale}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_min_size(min_size: usize) -> Result<(), FlowError> {
    // levels never shrink below one pixel
    if min_size == 0 {
        return Err(FlowError::InvalidParameter(
            "min_size must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn reduce<const C: usize>(src: &Image<f32, C>, downscale: f32) -> Result<Image<f32, C>, ImageError> {
    let mut dst = Image::from_size_val(reduced_size(src.size(), downscale), 0.0)?;
    pyramid_reduce(src, &mut dst, downscale)?;
    Ok(dst)
}

/// Build the image pyramids of an image pair.
///
/// Both images are reduced independently by `downscale` until the smaller
/// dimension of the newest level is at most `min_size`. An image pair whose
/// smaller dimension is already at most `min_size` yields a single level.
///
/// # Arguments
///
/// * `i0` - The first image.
/// * `i1` - The second image, same size as `i0`.
/// * `downscale` - The reduction factor between two levels, greater than one.
/// * `min_size` - The stop size.
///
/// # Returns
///
/// The pyramid ordered from the coarsest level to the input resolution.
///
/// # Errors
///
/// * [`FlowError::ShapeMismatch`] if the images have different sizes.
/// * [`FlowError::InvalidParameter`] if `downscale` is not greater than one
///   or `min_size` is zero.
///
/// # Example
///
/// ```
/// use pyrflow_flow::get_pyramid;
/// use pyrflow_image::{Image, ImageSize};
///
/// let size = ImageSize { width: 64, height: 48 };
/// let i0 = Image::<f32, 1>::from_size_val(size, 0.0).unwrap();
/// let i1 = Image::<f32, 1>::from_size_val(size, 1.0).unwrap();
///
/// let pyramid = get_pyramid(i0, i1, 2.0, 16).unwrap();
///
/// assert_eq!(pyramid.len(), 3);
/// assert_eq!(pyramid.coarsest().0.size(), ImageSize { width: 16, height: 12 });
/// assert_eq!(pyramid.finest().0.size(), size);
/// ```
pub fn get_pyramid<const C: usize>(
    i0: Image<f32, C>,
    i1: Image<f32, C>,
    downscale: f32,
    min_size: usize,
) -> Result<ImagePyramid<C>, FlowError> {
    if i0.size() != i1.size() {
        return Err(FlowError::ShapeMismatch(i0.size(), i1.size()));
    }

    validate_downscale(downscale)?;
    validate_min_size(min_size)?;

    let mut levels = vec![(i0, i1)];

    while let Some((prev0, prev1)) = levels
        .last()
        .filter(|(prev0, _)| prev0.size().min_dim() > min_size)
    {
        let next = (reduce(prev0, downscale)?, reduce(prev1, downscale)?);
        trace!("pyramid level {} with size {}", levels.len(), next.0.size());
        levels.push(next);
    }

    levels.reverse();

    Ok(ImagePyramid { levels })
}
