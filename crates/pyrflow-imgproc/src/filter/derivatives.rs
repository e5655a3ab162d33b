use crate::parallel;
use pyrflow_image::{Image, ImageError};

/// Boundary policy of the finite difference operators.
///
/// It decides the value of the one row or column per axis where the
/// difference stencil would read outside the image: the last one for forward
/// differences, the first one for backward differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DerivativeBorder {
    /// Copy the adjacent computed difference.
    ///
    /// An axis of length one has no adjacent difference and yields zero.
    #[default]
    Replicate,

    /// The missing neighbor equals the edge sample, the difference is zero.
    Neumann,

    /// The missing neighbor is read from the opposite edge.
    Wrap,
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

#[derive(Clone, Copy)]
enum Scheme {
    /// `p[i] - p[i + 1]`
    Forward,
    /// `p[i] - p[i - 1]`
    Backward,
}

/// Difference of `p` along one axis, written into a new image.
fn difference(p: &Image<f32, 1>, axis: Axis, scheme: Scheme, border: DerivativeBorder) -> Image<f32, 1> {
    let (rows, cols) = (p.rows(), p.cols());
    let src = p.as_slice();
    let len = match axis {
        Axis::X => cols,
        Axis::Y => rows,
    };

    let mut out = p.map(|_| 0.0f32);
    if len == 0 {
        return out;
    }

    parallel::par_iter_rows_indexed(&mut out, |r, row| {
        let at = |i: usize, c: usize| match axis {
            Axis::X => src[r * cols + i],
            Axis::Y => src[i * cols + c],
        };
        let index = |c: usize| match axis {
            Axis::X => c,
            Axis::Y => r,
        };

        for (c, val) in row.iter_mut().enumerate() {
            let i = index(c);
            *val = match scheme {
                Scheme::Forward if i + 1 < len => at(i, c) - at(i + 1, c),
                Scheme::Backward if i > 0 => at(i, c) - at(i - 1, c),
                // the boundary sample of the current axis
                Scheme::Forward => match border {
                    DerivativeBorder::Replicate if len > 1 => at(i - 1, c) - at(i, c),
                    DerivativeBorder::Replicate | DerivativeBorder::Neumann => 0.0,
                    DerivativeBorder::Wrap => at(i, c) - at(0, c),
                },
                Scheme::Backward => match border {
                    DerivativeBorder::Replicate if len > 1 => at(1, c) - at(0, c),
                    DerivativeBorder::Replicate | DerivativeBorder::Neumann => 0.0,
                    DerivativeBorder::Wrap => at(0, c) - at(len - 1, c),
                },
            };
        }
    });

    out
}

/// Forward difference scheme.
///
/// Computes `p_x[r, c] = p[r, c] - p[r, c + 1]` and
/// `p_y[r, c] = p[r, c] - p[r + 1, c]`. The last column of `p_x` and the last
/// row of `p_y` are resolved with `border`.
///
/// # Arguments
///
/// * `p` - The input single channel image.
/// * `border` - The boundary policy.
///
/// # Returns
///
/// The pair `(p_x, p_y)` with the size of `p`.
///
/// # Example
///
/// ```
/// use pyrflow_image::{Image, ImageSize};
/// use pyrflow_imgproc::filter::{forward_diff, DerivativeBorder};
///
/// let p = Image::<f32, 1>::new(
///     ImageSize { width: 3, height: 1 },
///     vec![0.0, 1.0, 3.0],
/// ).unwrap();
///
/// let (p_x, _) = forward_diff(&p, DerivativeBorder::Replicate);
///
/// assert_eq!(p_x.as_slice(), &[-1.0, -2.0, -2.0]);
/// ```
pub fn forward_diff(p: &Image<f32, 1>, border: DerivativeBorder) -> (Image<f32, 1>, Image<f32, 1>) {
    let p_x = difference(p, Axis::X, Scheme::Forward, border);
    let p_y = difference(p, Axis::Y, Scheme::Forward, border);
    (p_x, p_y)
}

/// Divergence of the vector field `(p1, p2)` with a backward difference scheme.
///
/// Computes `p1[r, c] - p1[r, c - 1] + p2[r, c] - p2[r - 1, c]`. The first
/// column of the `p1` term and the first row of the `p2` term are resolved
/// with `border`.
///
/// # Errors
///
/// If `p1` and `p2` have different sizes.
pub fn div(
    p1: &Image<f32, 1>,
    p2: &Image<f32, 1>,
    border: DerivativeBorder,
) -> Result<Image<f32, 1>, ImageError> {
    if p1.size() != p2.size() {
        return Err(ImageError::InvalidImageSize(
            p1.cols(),
            p1.rows(),
            p2.cols(),
            p2.rows(),
        ));
    }

    let p1_x = difference(p1, Axis::X, Scheme::Backward, border);
    let p2_y = difference(p2, Axis::Y, Scheme::Backward, border);

    let mut dst = p1.map(|_| 0.0f32);
    parallel::par_iter_rows_val_two(&p1_x, &p2_y, &mut dst, |a, b, d| *d = a + b);

    Ok(dst)
}
