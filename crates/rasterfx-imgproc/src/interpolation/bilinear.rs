use rasterfx_image::{Image, ImageDtype};

/// Kernel for bilinear interpolation
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
pub(crate) fn bilinear_interpolation<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
) -> [f32; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let u = u.max(0.0);
    let v = v.max(0.0);

    let iu0 = (u.trunc() as usize).min(cols - 1);
    let iv0 = (v.trunc() as usize).min(rows - 1);

    let frac_u = u.fract();
    let frac_v = v.fract();

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let w00 = frac_uu * frac_vv;
    let w01 = frac_u * frac_vv;
    let w10 = frac_uu * frac_v;
    let w11 = frac_u * frac_v;

    let iu1 = if iu0 + 1 < cols { iu0 + 1 } else { iu0 };
    let iv1 = if iv0 + 1 < rows { iv0 + 1 } else { iv0 };

    let data = image.as_slice();
    let texel = |iu: usize, iv: usize| {
        let base = (iv * cols + iu) * C;
        &data[base..base + C]
    };

    let p00 = texel(iu0, iv0);
    let p01 = texel(iu1, iv0);
    let p10 = texel(iu0, iv1);
    let p11 = texel(iu1, iv1);

    let mut pixel = [0.0; C];
    for (k, out) in pixel.iter_mut().enumerate() {
        let (a, b, c, d): (f32, f32, f32, f32) =
            (p00[k].into(), p01[k].into(), p10[k].into(), p11[k].into());
        *out = a * w00 + b * w01 + c * w10 + d * w11;
    }

    pixel
}
