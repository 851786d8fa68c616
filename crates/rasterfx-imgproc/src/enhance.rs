use rasterfx_image::{Image, ImageError};

use crate::parallel;

/// Invert the colors of an image.
///
/// dst(x,y,c) = 255 - src(x,y,c)
///
/// Applying it twice gives back the input.
///
/// # Example
///
/// ```
/// use rasterfx_image::{Image, ImageSize};
/// use rasterfx_imgproc::enhance::invert;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize { width: 1, height: 1 },
///     vec![255, 10, 0],
/// ).unwrap();
///
/// assert_eq!(invert(&image).unwrap().as_slice(), &[0, 245, 255]);
/// ```
pub fn invert(src: &Image<u8, 3>) -> Result<Image<u8, 3>, ImageError> {
    let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0)?;

    parallel::par_iter_rows_val(src, &mut dst, |&src_val, dst_val| {
        *dst_val = u8::MAX - src_val;
    });

    Ok(dst)
}

/// Adjust the brightness of an image by a constant offset.
///
/// dst(x,y,c) = clamp(src(x,y,c) + amount, 0, 255)
///
/// # Arguments
///
/// * `src` - The input image.
/// * `amount` - The offset added to every channel. Negative values darken.
///
/// # Returns
///
/// A new image where every channel saturates at the `[0, 255]` bounds instead
/// of wrapping.
pub fn adjust_brightness(src: &Image<u8, 3>, amount: i32) -> Result<Image<u8, 3>, ImageError> {
    let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0)?;

    parallel::par_iter_rows_val(src, &mut dst, |&src_val, dst_val| {
        *dst_val = (src_val as i32).saturating_add(amount).clamp(0, 255) as u8;
    });

    Ok(dst)
}
