use crate::border::BorderMode;
use crate::filter::{kernels::gaussian_kernel_1d, separable_filter};
use crate::interpolation::InterpolationMode;
use crate::resize::resize_native;
use pyrflow_image::{Image, ImageError, ImageSize};

/// Support of the anti-aliasing kernel in units of sigma.
const GAUSSIAN_TRUNCATE: f32 = 4.0;

fn reduced_dim(n: usize, downscale: f32) -> usize {
    let reduced = (n as f32 / downscale).ceil() as usize;
    // always make progress on dimensions that can still shrink
    if n > 1 && reduced >= n {
        n - 1
    } else {
        reduced.max(1)
    }
}

/// Compute the size of an image reduced by `downscale`.
///
/// Each dimension becomes `ceil(n / downscale)`, at least one pixel, and a
/// dimension larger than one pixel always shrinks.
///
/// # Example
///
/// ```
/// use pyrflow_image::ImageSize;
/// use pyrflow_imgproc::pyramid::reduced_size;
///
/// let size = reduced_size(ImageSize { width: 33, height: 16 }, 2.0);
///
/// assert_eq!(size, ImageSize { width: 17, height: 8 });
/// ```
pub fn reduced_size(size: ImageSize, downscale: f32) -> ImageSize {
    ImageSize {
        width: reduced_dim(size.width, downscale),
        height: reduced_dim(size.height, downscale),
    }
}

/// Smooth and then downsample an image.
///
/// The image is low-pass filtered with a Gaussian of
/// `sigma = 2 * downscale / 6` and reflected borders, then resampled
/// bilinearly to the size of `dst`. Channels are processed independently.
///
/// # Arguments
///
/// * `src` - The source image to be reduced.
/// * `dst` - The destination image, its size must be [`reduced_size`] of the source.
/// * `downscale` - The reduction factor, must be finite and greater than one.
///
/// # Errors
///
/// If `downscale` is not greater than one or `dst` has the wrong size.
///
/// # Example
///
/// ```
/// use pyrflow_image::{Image, ImageSize};
/// use pyrflow_imgproc::pyramid::{pyramid_reduce, reduced_size};
///
/// let image = Image::<f32, 1>::from_size_val(ImageSize { width: 8, height: 6 }, 1.0).unwrap();
///
/// let mut reduced = Image::<f32, 1>::from_size_val(reduced_size(image.size(), 2.0), 0.0).unwrap();
///
/// pyramid_reduce(&image, &mut reduced, 2.0).unwrap();
///
/// assert_eq!(reduced.width(), 4);
/// assert_eq!(reduced.height(), 3);
/// ```
pub fn pyramid_reduce<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    downscale: f32,
) -> Result<(), ImageError> {
    let expected = reduced_size(src.size(), downscale);

    if !downscale.is_finite() || downscale <= 1.0 || dst.size() != expected {
        return Err(ImageError::InvalidImageSize(
            expected.width,
            expected.height,
            dst.width(),
            dst.height(),
        ));
    }

    let sigma = 2.0 * downscale / 6.0;
    let kernel = gaussian_kernel_1d(sigma, GAUSSIAN_TRUNCATE);

    let mut smoothed = Image::<f32, C>::from_size_val(src.size(), 0.0)?;
    separable_filter(src, &mut smoothed, &kernel, &kernel, BorderMode::Reflect)?;

    resize_native(&smoothed, dst, InterpolationMode::Bilinear)?;

    Ok(())
}
