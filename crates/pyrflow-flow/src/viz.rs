use crate::error::FlowError;
use crate::field::FlowField;
use pyrflow_image::{GrayImage, Image};

/// Sizes of the color wheel segments: red-yellow, yellow-green, green-cyan,
/// cyan-blue, blue-magenta and magenta-red.
const WHEEL_SEGMENTS: [usize; 6] = [15, 6, 4, 11, 13, 6];

/// Parameters of the flow color coding.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColorCodeParams {
    /// Components with an absolute value above this threshold are treated as unknown motion.
    pub thresh: f32,
    /// Normalization of the flow norm, the largest norm of the field when `None`.
    pub max_flow: Option<f32>,
}

impl Default for ColorCodeParams {
    fn default() -> Self {
        Self {
            thresh: 1e9,
            max_flow: None,
        }
    }
}

/// The Middlebury color wheel, channel values in `[0, 255]`.
fn color_wheel() -> Vec<[f32; 3]> {
    let ramp = |i: usize, n: usize| (255.0 * i as f32 / n as f32).floor();

    let mut wheel = Vec::with_capacity(WHEEL_SEGMENTS.iter().sum());
    let [ry, yg, gc, cb, bm, mr] = WHEEL_SEGMENTS;

    wheel.extend((0..ry).map(|i| [255.0, ramp(i, ry), 0.0]));
    wheel.extend((0..yg).map(|i| [255.0 - ramp(i, yg), 255.0, 0.0]));
    wheel.extend((0..gc).map(|i| [0.0, 255.0, ramp(i, gc)]));
    wheel.extend((0..cb).map(|i| [0.0, 255.0 - ramp(i, cb), 255.0]));
    wheel.extend((0..bm).map(|i| [ramp(i, bm), 0.0, 255.0]));
    wheel.extend((0..mr).map(|i| [255.0, 0.0, 255.0 - ramp(i, mr)]));

    wheel
}

/// Zero the unknown and out of range motion.
///
/// Returns the cleaned field and, per pixel, whether the motion is known.
fn clean_flow(flow: &FlowField, thresh: f32) -> Result<(FlowField, Vec<bool>), FlowError> {
    let size = flow.size();
    let mut u = Vec::with_capacity(size.area());
    let mut v = Vec::with_capacity(size.area());
    let mut known = Vec::with_capacity(size.area());

    for (&fu, &fv) in flow.u().as_slice().iter().zip(flow.v().as_slice()) {
        let nan = fu.is_nan() || fv.is_nan();
        let out = !nan && (fu.abs() > thresh || fv.abs() > thresh);
        if nan || out {
            u.push(0.0);
            v.push(0.0);
        } else {
            u.push(fu);
            v.push(fv);
        }
        known.push(!nan);
    }

    let cleaned = FlowField::new(GrayImage::new(size, u)?, GrayImage::new(size, v)?)?;
    Ok((cleaned, known))
}

fn normalization(norm: &GrayImage, max_flow: Option<f32>) -> f32 {
    let max_norm = match max_flow {
        Some(max_flow) if max_flow > 0.0 => max_flow,
        _ => norm.as_slice().iter().copied().fold(0.0f32, f32::max),
    };
    max_norm + 1e-12
}

/// Color code a flow field with the Middlebury convention.
///
/// The hue encodes the direction of the motion. Motions with a norm up to one
/// pixel are blended towards white proportionally to their norm, so a zero
/// motion is white, and larger motions are darkened to three quarters of the
/// wheel color. Pixels with an undefined (NaN) component are black.
///
/// `params.max_flow` only normalizes the components before the direction is
/// taken, it does not change the output.
///
/// # Arguments
///
/// * `flow` - The flow field to visualize.
/// * `params` - The color coding parameters.
///
/// # Returns
///
/// An RGB image of the size of the field with values in `[0, 1]`.
///
/// # Errors
///
/// If the output image cannot be allocated for the field size.
pub fn flow_to_middlebury_color(
    flow: &FlowField,
    params: &ColorCodeParams,
) -> Result<Image<f32, 3>, FlowError> {
    let wheel = color_wheel();
    let ncols = wheel.len();

    let (cleaned, known) = clean_flow(flow, params.thresh)?;
    let norm = cleaned.magnitude();
    let max_norm = normalization(&norm, params.max_flow);

    let mut data = Vec::with_capacity(known.len() * 3);
    let pixels = cleaned
        .u()
        .as_slice()
        .iter()
        .zip(cleaned.v().as_slice())
        .zip(norm.as_slice())
        .zip(known);

    for (((&u, &v), &n), known) in pixels {
        let (u, v) = (u / max_norm, v / max_norm);

        let a = (-v).atan2(-u) / std::f32::consts::PI;
        let fk = (a + 1.0) / 2.0 * (ncols - 1) as f32;
        let k0 = (fk as usize).min(ncols - 1);
        let k1 = if k0 + 1 == ncols { 0 } else { k0 + 1 };
        let f = fk - k0 as f32;

        for ch in 0..3 {
            let col0 = wheel[k0][ch] / 255.0;
            let col1 = wheel[k1][ch] / 255.0;
            let col = (1.0 - f) * col0 + f * col1;

            let col = if n <= 1.0 {
                1.0 - n * (1.0 - col)
            } else {
                col * 0.75
            };

            let val = if known {
                (255.0 * col).clamp(0.0, 255.0).floor() / 255.0
            } else {
                0.0
            };
            data.push(val);
        }
    }

    Ok(Image::new(flow.size(), data)?)
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let h6 = h * 6.0;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    match h6.floor().rem_euclid(6.0) as u8 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// Color code a flow field in the HSV space.
///
/// After normalization by the largest norm (or by `params.max_flow`), the
/// vertical component gives the hue, the horizontal one the saturation and
/// the norm the value, so a zero motion is black. Unknown (NaN) and out of
/// range motion is treated as zero motion.
///
/// # Arguments
///
/// * `flow` - The flow field to visualize.
/// * `params` - The color coding parameters.
///
/// # Returns
///
/// An RGB image of the size of the field with values clamped to `[0, 1]`.
///
/// # Errors
///
/// If the output image cannot be allocated for the field size.
pub fn flow_to_color(
    flow: &FlowField,
    params: &ColorCodeParams,
) -> Result<Image<f32, 3>, FlowError> {
    let (cleaned, _) = clean_flow(flow, params.thresh)?;
    let norm = cleaned.magnitude();
    let max_norm = normalization(&norm, params.max_flow);

    let data = cleaned
        .u()
        .as_slice()
        .iter()
        .zip(cleaned.v().as_slice())
        .zip(norm.as_slice())
        .flat_map(|((&u, &v), &n)| hsv_to_rgb(v / max_norm, u / max_norm, n / max_norm))
        .map(|val| val.clamp(0.0, 1.0))
        .collect();

    Ok(Image::new(flow.size(), data)?)
}
