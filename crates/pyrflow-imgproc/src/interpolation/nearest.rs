use super::bilinear::sample_at;
use crate::border::BorderMode;
use pyrflow_image::Image;

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `c` - The channel of the pixel to interpolate.
/// * `border` - How coordinates outside the image are resolved.
///
/// # Returns
///
/// The value of the closest sample, unchanged.
pub(crate) fn nearest_neighbor_interpolation<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
    c: usize,
    border: BorderMode,
) -> f32 {
    let iu = u.round() as isize;
    let iv = v.round() as isize;

    sample_at(image, iu, iv, c, border)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyrflow_image::{ImageError, ImageSize};

    #[test]
    fn nearest_keeps_values() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![1.0, 2.0, 3.0, 4.0],
        )?;

        assert_eq!(nearest_neighbor_interpolation(&image, 0.4, 0.6, 0, BorderMode::Replicate), 3.0);
        assert_eq!(nearest_neighbor_interpolation(&image, 0.6, -0.25, 0, BorderMode::Replicate), 2.0);
        assert_eq!(nearest_neighbor_interpolation(&image, 5.0, 5.0, 0, BorderMode::Replicate), 4.0);
        assert_eq!(nearest_neighbor_interpolation(&image, 5.0, 5.0, 0, BorderMode::Constant(-1.0)), -1.0);

        Ok(())
    }
}
