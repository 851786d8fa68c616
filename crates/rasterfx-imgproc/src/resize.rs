use log::{debug, warn};
use rasterfx_image::{Image, ImageDtype, ImageError, ImageSize};

use crate::interpolation::{interpolate_pixel, InterpolationMode};

/// Resize an image to a new size.
///
/// Output pixel centers are mapped back onto the source grid with
/// `u = (x + 0.5) * src_w / dst_w - 0.5` (same for `v`), clamped to the source
/// extent, and sampled with the given interpolation mode. A same-size resize
/// returns the input unchanged.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `new_size` - The size of the output image.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// Returns [`ImageError::InvalidDimensions`] when `new_size` has a zero side,
/// or when the source is empty and there is nothing to sample.
///
/// # Example
///
/// ```
/// use rasterfx_image::{Image, ImageSize};
/// use rasterfx_imgproc::interpolation::InterpolationMode;
/// use rasterfx_imgproc::resize::resize;
///
/// let image = Image::<u8, 3>::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     7,
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let resized = resize(&image, new_size, InterpolationMode::Nearest).unwrap();
///
/// assert_eq!(resized.size(), new_size);
/// assert!(resized.as_slice().iter().all(|&v| v == 7));
/// ```
pub fn resize<T, const C: usize>(
    src: &Image<T, C>,
    new_size: ImageSize,
    interpolation: InterpolationMode,
) -> Result<Image<T, C>, ImageError>
where
    T: ImageDtype,
{
    if new_size.is_empty() {
        return Err(ImageError::InvalidDimensions(
            new_size.width,
            new_size.height,
        ));
    }

    if src.is_empty() {
        warn!("resize: source image {} has no pixels", src.size());
        return Err(ImageError::InvalidDimensions(src.width(), src.height()));
    }

    debug!(
        "resize: {} -> {} with {:?}",
        src.size(),
        new_size,
        interpolation
    );

    let scale_x = src.cols() as f32 / new_size.width as f32;
    let scale_y = src.rows() as f32 / new_size.height as f32;
    let max_u = (src.cols() - 1) as f32;
    let max_v = (src.rows() - 1) as f32;

    let mut dst = Image::<T, C>::from_size_val(new_size, T::default())?;

    dst.as_slice_mut()
        .chunks_exact_mut(C * new_size.width)
        .enumerate()
        .for_each(|(y, row)| {
            let v = ((y as f32 + 0.5) * scale_y - 0.5).clamp(0.0, max_v);
            row.chunks_exact_mut(C)
                .enumerate()
                .for_each(|(x, dst_pixel)| {
                    let u = ((x as f32 + 0.5) * scale_x - 0.5).clamp(0.0, max_u);
                    let pixel = interpolate_pixel(src, u, v, interpolation);
                    for (out, val) in dst_pixel.iter_mut().zip(pixel) {
                        *out = T::from_f32(val);
                    }
                });
        });

    Ok(dst)
}

/// Scale an RGB image to `target_width` x `target_height` with bilinear interpolation.
///
/// # Errors
///
/// Returns [`ImageError::InvalidDimensions`] when a target side is zero.
pub fn scale(
    src: &Image<u8, 3>,
    target_width: usize,
    target_height: usize,
) -> Result<Image<u8, 3>, ImageError> {
    resize(
        src,
        ImageSize {
            width: target_width,
            height: target_height,
        },
        InterpolationMode::Bilinear,
    )
}
