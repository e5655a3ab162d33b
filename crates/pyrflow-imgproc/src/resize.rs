use crate::border::BorderMode;
use crate::interpolation::{interpolate_pixel, InterpolationMode};
use crate::parallel;
use pyrflow_image::{Image, ImageError};

/// Map a destination coordinate to the source grid with half-pixel centers.
#[inline]
fn source_coordinate(dst_index: usize, scale: f32) -> f32 {
    (dst_index as f32 + 0.5) * scale - 0.5
}

/// Resize an image to a new size.
///
/// The function resizes an image to the size of `dst` using the specified
/// interpolation mode. Pixel centers are aligned, i.e. the destination pixel
/// `x` samples the source at `(x + 0.5) * src_width / dst_width - 0.5`, and
/// no anti-aliasing is applied. Coordinates beyond the outermost pixel
/// centers replicate the edge.
///
/// It supports any number of channels.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `dst` - The output image container, its size is the target size.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// If either image is empty.
///
/// # Example
///
/// ```
/// use pyrflow_image::{Image, ImageSize};
/// use pyrflow_imgproc::interpolation::InterpolationMode;
/// use pyrflow_imgproc::resize::resize_native;
///
/// let image = Image::<_, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0f32; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0.0).unwrap();
///
/// resize_native(&image, &mut image_resized, InterpolationMode::Nearest).unwrap();
///
/// assert_eq!(image_resized.num_channels(), 3);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
pub fn resize_native<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    if src.size().area() == 0 || dst.size().area() == 0 {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let scale_x = src.cols() as f32 / dst.cols() as f32;
    let scale_y = src.rows() as f32 / dst.rows() as f32;

    parallel::par_iter_rows_indexed(dst, |r, dst_row| {
        let v = source_coordinate(r, scale_y);
        dst_row
            .chunks_exact_mut(C)
            .enumerate()
            .for_each(|(c, dst_pixel)| {
                let u = source_coordinate(c, scale_x);
                dst_pixel.iter_mut().enumerate().for_each(|(k, pixel)| {
                    *pixel = interpolate_pixel(src, u, v, k, interpolation, BorderMode::Replicate);
                });
            });
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyrflow_image::ImageSize;

    #[test]
    fn resize_smoke_ch3() -> Result<(), ImageError> {
        let image = Image::<_, 3>::new(
            ImageSize {
                width: 4,
                height: 5,
            },
            vec![0f32; 4 * 5 * 3],
        )?;

        let new_size = ImageSize {
            width: 2,
            height: 3,
        };

        let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0.0)?;

        resize_native(&image, &mut image_resized, InterpolationMode::Bilinear)?;

        assert_eq!(image_resized.num_channels(), 3);
        assert_eq!(image_resized.size(), new_size);

        Ok(())
    }

    #[test]
    fn resize_nearest_upsample() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![1.0, 2.0, 3.0, 4.0],
        )?;

        let mut dst = Image::<f32, 1>::from_size_val([4, 4].into(), 0.0)?;
        resize_native(&image, &mut dst, InterpolationMode::Nearest)?;

        #[rustfmt::skip]
        assert_eq!(dst.as_slice(), &[
            1.0, 1.0, 2.0, 2.0,
            1.0, 1.0, 2.0, 2.0,
            3.0, 3.0, 4.0, 4.0,
            3.0, 3.0, 4.0, 4.0,
        ]);

        Ok(())
    }

    #[test]
    fn resize_bilinear_downsample() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 4,
                height: 1,
            },
            vec![0.0, 2.0, 4.0, 6.0],
        )?;

        let mut dst = Image::<f32, 1>::from_size_val([2, 1].into(), 0.0)?;
        resize_native(&image, &mut dst, InterpolationMode::Bilinear)?;

        // samples at 0.5 and 2.5
        assert_eq!(dst.as_slice(), &[1.0, 5.0]);

        Ok(())
    }

    #[test]
    fn resize_empty() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::from_size_val([2, 2].into(), 0.0)?;
        let mut dst = Image::<f32, 1>::from_size_val([0, 2].into(), 0.0)?;
        assert!(resize_native(&image, &mut dst, InterpolationMode::Nearest).is_err());

        Ok(())
    }
}
