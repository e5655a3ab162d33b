/// Create a normalized gaussian kernel whose support is derived from sigma.
///
/// The kernel has a radius of `round(truncate * sigma)` samples on each side
/// of the center, so its length is always odd.
///
/// # Arguments
///
/// * `sigma` - The sigma of the gaussian kernel, must be positive.
/// * `truncate` - The support of the kernel in units of sigma.
///
/// # Returns
///
/// A vector of the kernel, its coefficients sum to one.
pub fn gaussian_kernel_1d(sigma: f32, truncate: f32) -> Vec<f32> {
    let radius = (truncate * sigma + 0.5) as usize;
    let sigma_sq = sigma * sigma;

    let mut kernel = (0..2 * radius + 1)
        .map(|i| {
            let x = i as f32 - radius as f32;
            (-(x * x) / (2.0 * sigma_sq)).exp()
        })
        .collect::<Vec<_>>();

    let norm = kernel.iter().sum::<f32>();
    kernel.iter_mut().for_each(|k| *k /= norm);
    kernel
}
