use crate::{
    border::BorderMode,
    interpolation::{grid::pixel_center_meshgrid, interpolate_pixel, InterpolationMode},
    parallel,
};
use pyrflow_image::{Image, ImageError};

/// Base coordinates `(map_x, map_y)` the flow displacement is added to.
pub type SamplingGrid<'a> = (&'a Image<f32, 1>, &'a Image<f32, 1>);

fn check_size<const C: usize>(src: &Image<f32, C>, other: &Image<f32, 1>) -> Result<(), ImageError> {
    if src.size() != other.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            other.cols(),
            other.rows(),
        ));
    }
    Ok(())
}

/// Warp an image with a dense motion field.
///
/// Every output pixel `(r, c)` samples `src` bilinearly at
/// `(grid_x[r, c] + u[r, c], grid_y[r, c] + v[r, c])`. Without an explicit
/// grid the pixel-center grid `(c - 0.5, r - 0.5)` is used. Samples outside
/// the image are resolved with `border`.
///
/// # Arguments
///
/// * `src` - The image to warp with shape (H, W, C).
/// * `u` - The horizontal displacement, shape (H, W).
/// * `v` - The vertical displacement, shape (H, W).
/// * `grid` - Optional base coordinates, shape (H, W) each.
/// * `border` - The out of bounds policy.
///
/// # Returns
///
/// The warped image with the size of `src`.
///
/// # Errors
///
/// If the flow components or the grid do not have the size of `src`.
///
/// # Example
///
/// ```
/// use pyrflow_image::{Image, ImageSize};
/// use pyrflow_imgproc::border::BorderMode;
/// use pyrflow_imgproc::warp::warp_flow;
///
/// let size = ImageSize { width: 4, height: 3 };
/// let src = Image::<f32, 1>::from_size_val(size, 2.0).unwrap();
/// let u = Image::<f32, 1>::from_size_val(size, 0.3).unwrap();
/// let v = Image::<f32, 1>::from_size_val(size, -1.2).unwrap();
///
/// let warped = warp_flow(&src, &u, &v, None, BorderMode::Replicate).unwrap();
///
/// assert_eq!(warped.size(), size);
/// assert!(warped.as_slice().iter().all(|&x| (x - 2.0).abs() < 1e-6));
/// ```
pub fn warp_flow<const C: usize>(
    src: &Image<f32, C>,
    u: &Image<f32, 1>,
    v: &Image<f32, 1>,
    grid: Option<SamplingGrid<'_>>,
    border: BorderMode,
) -> Result<Image<f32, C>, ImageError> {
    check_size(src, u)?;
    check_size(src, v)?;

    let default_grid;
    let (grid_x, grid_y) = match grid {
        Some((grid_x, grid_y)) => {
            check_size(src, grid_x)?;
            check_size(src, grid_y)?;
            (grid_x, grid_y)
        }
        None => {
            default_grid = pixel_center_meshgrid(src.size());
            (&default_grid.0, &default_grid.1)
        }
    };

    // displaced sampling positions
    let mut map_x = Image::<f32, 1>::from_size_val(src.size(), 0.0)?;
    let mut map_y = Image::<f32, 1>::from_size_val(src.size(), 0.0)?;
    parallel::par_iter_rows_val_two(grid_x, u, &mut map_x, |g, d, m| *m = g + d);
    parallel::par_iter_rows_val_two(grid_y, v, &mut map_y, |g, d, m| *m = g + d);

    let mut dst = Image::<f32, C>::from_size_val(src.size(), 0.0)?;
    parallel::par_iter_rows_resample(&mut dst, &map_x, &map_y, |&x, &y, dst_pixel| {
        dst_pixel.iter_mut().enumerate().for_each(|(c, pixel)| {
            *pixel = interpolate_pixel(src, x, y, c, InterpolationMode::Bilinear, border);
        });
    });

    Ok(dst)
}
