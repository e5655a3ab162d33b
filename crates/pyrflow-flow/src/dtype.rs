use pyrflow_image::{Image, ImageError};

/// Pixel types that can be brought to the canonical floating point range.
///
/// Unsigned integer samples are scaled by the maximum of their type into
/// `[0, 1]`, signed integer samples into `[-1, 1]` with the minimum of the
/// type clamped to `-1`. Floating point samples are cast unchanged.
pub trait CanonicalFloat: num_traits::NumCast + Copy + Send + Sync {
    /// Factor applied to the samples after the cast to `f32`.
    const SCALE: f32;
    /// Lower bound of the scaled samples, if any.
    const LOWER_BOUND: Option<f32> = None;
}

impl CanonicalFloat for u8 {
    const SCALE: f32 = 1.0 / u8::MAX as f32;
}

impl CanonicalFloat for u16 {
    const SCALE: f32 = 1.0 / u16::MAX as f32;
}

impl CanonicalFloat for i8 {
    const SCALE: f32 = 1.0 / i8::MAX as f32;
    const LOWER_BOUND: Option<f32> = Some(-1.0);
}

impl CanonicalFloat for i16 {
    const SCALE: f32 = 1.0 / i16::MAX as f32;
    const LOWER_BOUND: Option<f32> = Some(-1.0);
}

impl CanonicalFloat for f32 {
    const SCALE: f32 = 1.0;
}

impl CanonicalFloat for f64 {
    const SCALE: f32 = 1.0;
}

/// Convert an image to the canonical `f32` representation.
///
/// This is the normalization step applied by the coarse-to-fine driver before
/// building the pyramid, so that solvers always receive `f32` samples with a
/// consistent range.
///
/// # Errors
///
/// If a sample cannot be cast to `f32`.
///
/// # Example
///
/// ```
/// use pyrflow_flow::to_canonical_float;
/// use pyrflow_image::{Image, ImageSize};
///
/// let image = Image::<u8, 1>::new(ImageSize { width: 2, height: 1 }, vec![0, 255]).unwrap();
///
/// let image_f32 = to_canonical_float(&image).unwrap();
///
/// assert_eq!(image_f32.as_slice(), &[0.0, 1.0]);
/// ```
pub fn to_canonical_float<T: CanonicalFloat, const C: usize>(
    image: &Image<T, C>,
) -> Result<Image<f32, C>, ImageError> {
    let mut image_f32 = image.cast_and_scale::<f32>(T::SCALE)?;

    if let Some(lower) = T::LOWER_BOUND {
        image_f32
            .as_slice_mut()
            .iter_mut()
            .for_each(|val| *val = val.max(lower));
    }

    Ok(image_f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyrflow_image::ImageSize;

    #[test]
    fn canonical_u16() -> Result<(), ImageError> {
        let image = Image::<u16, 1>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![0, 32768, 65535],
        )?;
        let image_f32 = to_canonical_float(&image)?;
        assert_eq!(image_f32.as_slice()[0], 0.0);
        assert!((image_f32.as_slice()[1] - 0.5).abs() < 1e-4);
        assert!((image_f32.as_slice()[2] - 1.0).abs() < 1e-6);

        Ok(())
    }

    #[test]
    fn canonical_float_unchanged() -> Result<(), ImageError> {
        let image = Image::<f64, 2>::new([1, 1].into(), vec![-2.5, 300.0])?;
        let image_f32 = to_canonical_float(&image)?;
        assert_eq!(image_f32.as_slice(), &[-2.5, 300.0]);

        Ok(())
    }

    #[test]
    fn canonical_signed() -> Result<(), ImageError> {
        let image = Image::<i8, 1>::new([4, 1].into(), vec![-128, -127, 0, 127])?;
        let image_f32 = to_canonical_float(&image)?;
        let expected = [-1.0, -1.0, 0.0, 1.0];
        for (val, exp) in image_f32.as_slice().iter().zip(expected) {
            assert!((val - exp).abs() < 1e-6);
        }

        let image = Image::<i16, 1>::new([3, 1].into(), vec![i16::MIN, -16384, i16::MAX])?;
        let image_f32 = to_canonical_float(&image)?;
        assert_eq!(image_f32.as_slice()[0], -1.0);
        assert!((image_f32.as_slice()[1] + 0.5).abs() < 1e-4);
        assert!((image_f32.as_slice()[2] - 1.0).abs() < 1e-6);

        Ok(())
    }
}
