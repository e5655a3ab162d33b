use pyrflow_image::{Image, ImageSize};

/// Create a meshgrid of x and y coordinates shifted by `offset`.
///
/// # Arguments
///
/// * `size` - The size of the grid.
/// * `offset` - The value added to every integer coordinate.
///
/// # Returns
///
/// A tuple of single channel images `(map_x, map_y)` where
/// `map_x[r, c] = c + offset` and `map_y[r, c] = r + offset`.
pub fn meshgrid_with_offset(size: ImageSize, offset: f32) -> (Image<f32, 1>, Image<f32, 1>) {
    let map_x = Image::from_fn(size, |x, _, _| x as f32 + offset);
    let map_y = Image::from_fn(size, |_, y, _| y as f32 + offset);
    (map_x, map_y)
}

/// Create a meshgrid of integer x and y coordinates.
///
/// # Example
///
/// ```
/// use pyrflow_image::ImageSize;
/// use pyrflow_imgproc::interpolation::grid::meshgrid;
///
/// let (map_x, map_y) = meshgrid(ImageSize { width: 3, height: 2 });
///
/// assert_eq!(map_x.as_slice(), &[0.0, 1.0, 2.0, 0.0, 1.0, 2.0]);
/// assert_eq!(map_y.as_slice(), &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
/// ```
pub fn meshgrid(size: ImageSize) -> (Image<f32, 1>, Image<f32, 1>) {
    meshgrid_with_offset(size, 0.0)
}

/// Create the default sampling grid of the flow warping.
///
/// Coordinates follow the pixel-center convention: every integer coordinate is
/// shifted by `-0.5` on both axes.
pub fn pixel_center_meshgrid(size: ImageSize) -> (Image<f32, 1>, Image<f32, 1>) {
    meshgrid_with_offset(size, -0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_center_grid() {
        let (map_x, map_y) = pixel_center_meshgrid(ImageSize {
            width: 2,
            height: 3,
        });
        assert_eq!(map_x.as_slice(), &[-0.5, 0.5, -0.5, 0.5, -0.5, 0.5]);
        assert_eq!(map_y.as_slice(), &[-0.5, -0.5, 0.5, 0.5, 1.5, 1.5]);
    }
}
