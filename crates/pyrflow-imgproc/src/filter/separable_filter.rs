use rayon::prelude::*;

use crate::border::BorderMode;
use pyrflow_image::{Image, ImageError};

/// A separable 2D filter that applies horizontal and vertical 1D convolutions sequentially.
///
/// This struct caches the kernel data and precomputed offsets for efficient filtering.
struct SeparableFilter<'a> {
    kernel_x: &'a [f32],
    kernel_y: &'a [f32],
    offsets_x: Vec<isize>,
    offsets_y: Vec<isize>,
    border: BorderMode,
}

impl<'a> SeparableFilter<'a> {
    fn new(kernel_x: &'a [f32], kernel_y: &'a [f32], border: BorderMode) -> Self {
        let half_x = kernel_x.len() / 2;
        let half_y = kernel_y.len() / 2;

        let offsets_x = (0..kernel_x.len())
            .map(|i| i as isize - half_x as isize)
            .collect();

        let offsets_y = (0..kernel_y.len())
            .map(|i| i as isize - half_y as isize)
            .collect();

        Self {
            kernel_x,
            kernel_y,
            offsets_x,
            offsets_y,
            border,
        }
    }

    fn apply<const C: usize>(&self, src: &Image<f32, C>, dst: &mut Image<f32, C>) {
        let (rows, cols) = (src.rows(), src.cols());
        if rows == 0 || cols == 0 {
            return;
        }

        let src_data = src.as_slice();
        let fill = self.border.fill_value();
        let mut temp = vec![0.0f32; src_data.len()];

        // Horizontal
        temp.par_chunks_exact_mut(cols * C)
            .enumerate()
            .for_each(|(r, row_temp)| {
                let row_offset = r * cols * C;
                for c in 0..cols {
                    let mut acc = [0.0f32; C];
                    for (&k, &off) in self.kernel_x.iter().zip(self.offsets_x.iter()) {
                        match self.border.map_index(c as isize + off, cols) {
                            Some(x) => {
                                let idx = row_offset + x * C;
                                for (ch, acc_val) in acc.iter_mut().enumerate() {
                                    *acc_val += src_data[idx + ch] * k;
                                }
                            }
                            None => acc.iter_mut().for_each(|a| *a += fill * k),
                        }
                    }
                    row_temp[c * C..(c + 1) * C].copy_from_slice(&acc);
                }
            });

        // Vertical
        let temp = &temp;
        dst.as_slice_mut()
            .par_chunks_exact_mut(cols * C)
            .enumerate()
            .for_each(|(r, row_dst)| {
                for c in 0..cols {
                    let mut acc = [0.0f32; C];
                    for (&k, &off) in self.kernel_y.iter().zip(self.offsets_y.iter()) {
                        match self.border.map_index(r as isize + off, rows) {
                            Some(y) => {
                                let idx = (y * cols + c) * C;
                                for (ch, acc_val) in acc.iter_mut().enumerate() {
                                    *acc_val += temp[idx + ch] * k;
                                }
                            }
                            None => acc.iter_mut().for_each(|a| *a += fill * k),
                        }
                    }
                    row_dst[c * C..(c + 1) * C].copy_from_slice(&acc);
                }
            });
    }
}

/// Apply a separable filter to an image.
///
/// Channels are filtered independently. Samples outside the image are taken
/// according to `border`.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel_x` - The horizontal kernel.
/// * `kernel_y` - The vertical kernel.
/// * `border` - The border mode used for out of bounds samples.
///
/// # Errors
///
/// If the source and destination sizes differ.
pub fn separable_filter<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    kernel_x: &[f32],
    kernel_y: &[f32],
    border: BorderMode,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    SeparableFilter::new(kernel_x, kernel_y, border).apply(src, dst);

    Ok(())
}
