use rasterfx_image::{Image, ImageDtype};

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values.
pub(crate) fn nearest_neighbor_interpolation<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
) -> [f32; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let iu = (u.round().max(0.0) as usize).min(cols - 1);
    let iv = (v.round().max(0.0) as usize).min(rows - 1);

    let base = (iv * cols + iu) * C;
    let src = &image.as_slice()[base..base + C];

    let mut pixel = [0.0; C];
    for (p, &s) in pixel.iter_mut().zip(src.iter()) {
        *p = s.into();
    }

    pixel
}
