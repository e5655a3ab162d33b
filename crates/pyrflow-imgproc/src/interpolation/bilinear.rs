use crate::border::BorderMode;
use pyrflow_image::Image;

/// Fetch the sample at integer coordinates, resolving the border.
#[inline]
pub(crate) fn sample_at<const C: usize>(
    image: &Image<f32, C>,
    x: isize,
    y: isize,
    c: usize,
    border: BorderMode,
) -> f32 {
    let (rows, cols) = (image.rows(), image.cols());
    match (border.map_index(x, cols), border.map_index(y, rows)) {
        (Some(ix), Some(iy)) => image.as_slice()[(iy * cols + ix) * C + c],
        _ => border.fill_value(),
    }
}

/// Kernel for bilinear interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `c` - The channel of the pixel to interpolate.
/// * `border` - How the neighbors outside the image are resolved.
///
/// # Returns
///
/// The interpolated pixel value.
pub(crate) fn bilinear_interpolation<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
    c: usize,
    border: BorderMode,
) -> f32 {
    let u0 = u.floor();
    let v0 = v.floor();

    let frac_u = u - u0;
    let frac_v = v - v0;

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let iu0 = u0 as isize;
    let iv0 = v0 as isize;

    let p00 = sample_at(image, iu0, iv0, c, border);
    let p01 = sample_at(image, iu0.saturating_add(1), iv0, c, border);
    let p10 = sample_at(image, iu0, iv0.saturating_add(1), c, border);
    let p11 = sample_at(image, iu0.saturating_add(1), iv0.saturating_add(1), c, border);

    p00 * frac_uu * frac_vv + p01 * frac_u * frac_vv + p10 * frac_uu * frac_v + p11 * frac_u * frac_v
}
