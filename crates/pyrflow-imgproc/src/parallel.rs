use rayon::prelude::*;

use pyrflow_image::Image;

/// Apply a function to each row of the image in parallel.
///
/// The closure receives the row index and the mutable row buffer of
/// `cols * C` samples.
pub fn par_iter_rows_indexed<T, const C: usize>(
    dst: &mut Image<T, C>,
    f: impl Fn(usize, &mut [T]) + Send + Sync,
) where
    T: Send + Sync,
{
    let cols = dst.cols();
    if cols == 0 {
        return;
    }

    dst.as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .enumerate()
        .for_each(|(r, dst_row)| f(r, dst_row));
}

/// Apply a function to each pixel in the image in parallel with two values.
pub fn par_iter_rows_val_two<T1, T2, T3, const C: usize>(
    src1: &Image<T1, C>,
    src2: &Image<T2, C>,
    dst: &mut Image<T3, C>,
    f: impl Fn(&T1, &T2, &mut T3) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
    T3: Send + Sync,
{
    let cols = src1.cols();
    if cols == 0 {
        return;
    }

    src1.as_slice()
        .par_chunks_exact(C * cols)
        .zip(src2.as_slice().par_chunks_exact(C * cols))
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C * cols))
        .for_each(|((src1_chunk, src2_chunk), dst_chunk)| {
            src1_chunk
                .iter()
                .zip(src2_chunk.iter())
                .zip(dst_chunk.iter_mut())
                .for_each(|((src1_pixel, src2_pixel), dst_pixel)| {
                    f(src1_pixel, src2_pixel, dst_pixel);
                });
        });
}

/// Apply a function to each pixel for grid sampling in parallel.
///
/// `map_x` and `map_y` hold the sampling coordinates of every output pixel and
/// must have the size of `dst`.
pub fn par_iter_rows_resample<const C: usize>(
    dst: &mut Image<f32, C>,
    map_x: &Image<f32, 1>,
    map_y: &Image<f32, 1>,
    f: impl Fn(&f32, &f32, &mut [f32]) + Send + Sync,
) {
    let cols = dst.cols();
    if cols == 0 {
        return;
    }

    let map_x_slice = map_x.as_slice();
    let map_y_slice = map_y.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .zip(map_x_slice.par_chunks_exact(cols))
        .zip(map_y_slice.par_chunks_exact(cols))
        .for_each(|((dst_chunk, map_x_chunk), map_y_chunk)| {
            dst_chunk
                .chunks_exact_mut(C)
                .zip(map_x_chunk.iter().zip(map_y_chunk.iter()))
                .for_each(|(dst_pixel, (x, y))| {
                    f(x, y, dst_pixel);
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyrflow_image::{ImageError, ImageSize};

    #[test]
    fn rows_indexed() -> Result<(), ImageError> {
        let mut image = Image::<f32, 2>::from_size_val(
            ImageSize {
                width: 2,
                height: 3,
            },
            0.0,
        )?;
        par_iter_rows_indexed(&mut image, |r, row| {
            row.iter_mut().for_each(|v| *v = r as f32);
        });
        assert_eq!(image.as_slice(), &[0., 0., 0., 0., 1., 1., 1., 1., 2., 2., 2., 2.]);

        Ok(())
    }

    #[test]
    fn val_two() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 2,
        };
        let a = Image::<f32, 1>::new(size, vec![1., 2., 3., 4.])?;
        let b = Image::<f32, 1>::new(size, vec![10., 20., 30., 40.])?;
        let mut dst = Image::<f32, 1>::from_size_val(size, 0.0)?;
        par_iter_rows_val_two(&a, &b, &mut dst, |a, b, d| *d = a + b);
        assert_eq!(dst.as_slice(), &[11., 22., 33., 44.]);

        Ok(())
    }

    #[test]
    fn resample_coordinates() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 1,
        };
        let map_x = Image::<f32, 1>::new(size, vec![0.5, 1.5])?;
        let map_y = Image::<f32, 1>::new(size, vec![2.0, 3.0])?;
        let mut dst = Image::<f32, 2>::from_size_val(size, 0.0)?;
        par_iter_rows_resample(&mut dst, &map_x, &map_y, |&x, &y, px| {
            px[0] = x;
            px[1] = y;
        });
        assert_eq!(dst.as_slice(), &[0.5, 2.0, 1.5, 3.0]);

        Ok(())
    }
}
