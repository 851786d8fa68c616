use crate::parallel;
use rasterfx_image::{Image, ImageError, Rgb8};

/// Define the RGB weights for the grayscale conversion, in thousandths.
const RW: u32 = 299;
const GW: u32 = 587;
const BW: u32 = 114;

/// Luma of an RGB triple using the formula:
///
/// Y = 0.299 * R + 0.587 * G + 0.114 * B
///
/// truncated toward zero. The weights are applied in exact integer
/// arithmetic, so a gray triple `(v, v, v)` always maps back to `v`.
///
/// # Example
///
/// ```
/// use rasterfx_image::Rgb8;
/// use rasterfx_imgproc::color::luma;
///
/// assert_eq!(luma(Rgb8::new(0, 0, 255)), 29);
/// assert_eq!(luma(Rgb8::gray(77)), 77);
/// ```
#[inline]
pub fn luma(px: Rgb8) -> u8 {
    // the weights sum to 1000 so the quotient never exceeds 255
    ((RW * px.r as u32 + GW * px.g as u32 + BW * px.b as u32) / 1000) as u8
}

/// Convert an RGB image to grayscale, keeping three channels.
///
/// Each output pixel carries its luma (see [`luma`]) in all three channels.
///
/// # Arguments
///
/// * `src` - The input RGB image.
///
/// # Returns
///
/// A new image of the same size where `R == G == B` for every pixel.
///
/// # Example
///
/// ```
/// use rasterfx_image::{Image, ImageSize};
/// use rasterfx_imgproc::color::grayscale;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize { width: 1, height: 1 },
///     vec![255, 0, 0],
/// ).unwrap();
///
/// let gray = grayscale(&image).unwrap();
/// assert_eq!(gray.as_slice(), &[76, 76, 76]);
/// ```
pub fn grayscale(src: &Image<u8, 3>) -> Result<Image<u8, 3>, ImageError> {
    let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0)?;

    // parallelize the grayscale conversion by rows
    parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        Rgb8::gray(luma(Rgb8::from_slice(src_pixel))).write_to(dst_pixel);
    });

    Ok(dst)
}
