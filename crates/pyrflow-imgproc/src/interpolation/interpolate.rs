use super::bilinear::bilinear_interpolation;
use super::nearest::nearest_neighbor_interpolation;
use crate::border::BorderMode;
use pyrflow_image::Image;

/// How a sample is reconstructed at a sub-pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    /// Weighted average of the four surrounding pixels.
    Bilinear,
    /// Value of the closest pixel, rounding half away from zero.
    Nearest,
}

/// Sample channel `c` of `image` at the sub-pixel position `(u, v)`.
///
/// `u` runs along the columns and `v` along the rows, integer positions are
/// pixel centers. Neighbors outside the image are resolved with `border`.
pub fn interpolate_pixel<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
    c: usize,
    interpolation: InterpolationMode,
    border: BorderMode,
) -> f32 {
    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v, c, border),
        InterpolationMode::Nearest => nearest_neighbor_interpolation(image, u, v, c, border),
    }
}
