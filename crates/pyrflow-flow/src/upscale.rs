use crate::error::FlowError;
use crate::field::FlowField;
use pyrflow_image::{GrayImage, ImageError, ImageSize};
use pyrflow_imgproc::interpolation::InterpolationMode;
use pyrflow_imgproc::resize::resize_native;

fn resize_component(src: &GrayImage, size: ImageSize, scale: f32) -> Result<GrayImage, FlowError> {
    let mut dst = GrayImage::from_size_val(size, 0.0)?;
    resize_native(src, &mut dst, InterpolationMode::Nearest)?;
    dst.as_slice_mut().iter_mut().for_each(|val| *val *= scale);
    Ok(dst)
}

/// Rescale a flow field to a finer resolution.
///
/// Both components are resampled with nearest neighbor interpolation and no
/// smoothing, then the horizontal component is multiplied by
/// `target.width / width` and the vertical one by `target.height / height` so
/// that displacements are expressed in pixels of the new grid.
///
/// # Arguments
///
/// * `flow` - The flow field to rescale.
/// * `target` - The size of the output field.
///
/// # Errors
///
/// If the flow field or the target size is empty.
///
/// # Example
///
/// ```
/// use pyrflow_flow::{upscale_flow, FlowField};
/// use pyrflow_image::ImageSize;
///
/// let flow = FlowField::from_constant(ImageSize { width: 8, height: 4 }, 1.0, -1.0);
///
/// let up = upscale_flow(&flow, ImageSize { width: 16, height: 12 }).unwrap();
///
/// assert_eq!(up.size(), ImageSize { width: 16, height: 12 });
/// assert_eq!(up.u().as_slice()[0], 2.0);
/// assert_eq!(up.v().as_slice()[0], -3.0);
/// ```
pub fn upscale_flow(flow: &FlowField, target: ImageSize) -> Result<FlowField, FlowError> {
    let size = flow.size();
    if size.area() == 0 || target.area() == 0 {
        return Err(ImageError::InvalidImageSize(
            size.width,
            size.height,
            target.width,
            target.height,
        )
        .into());
    }

    let sx = target.width as f32 / size.width as f32;
    let sy = target.height as f32 / size.height as f32;

    let u = resize_component(flow.u(), target, sx)?;
    let v = resize_component(flow.v(), target, sy)?;

    FlowField::new(u, v)
}
