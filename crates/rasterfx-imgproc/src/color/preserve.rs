use log::debug;
use rasterfx_image::{ColorMask, Image, ImageError, PackedArgb, Rgb8};

use super::gray::luma;

/// Half-widths of the channel-difference bands used by [`preserve_color`].
///
/// A pixel keeps its color when each of its pairwise channel differences
/// `r - g`, `g - b`, `b - r` lies strictly within `tolerance` of the same
/// difference of the target color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTolerance {
    /// Tolerance on `r - g`.
    pub rg: i32,
    /// Tolerance on `g - b`.
    pub gb: i32,
    /// Tolerance on `b - r`.
    pub br: i32,
}

impl ColorTolerance {
    /// The same tolerance on all three differences.
    pub const fn uniform(tolerance: i32) -> Self {
        Self {
            rg: tolerance,
            gb: tolerance,
            br: tolerance,
        }
    }
}

impl Default for ColorTolerance {
    fn default() -> Self {
        Self::uniform(10)
    }
}

/// Exclusive `(low, high)` bands around the target's channel differences.
struct HueBands([(i32, i32); 3]);

impl HueBands {
    fn new(target: Rgb8, tolerance: ColorTolerance) -> Self {
        let [rg, gb, br] = target.channel_diffs();
        let band = |d: i32, t: i32| (d.saturating_sub(t), d.saturating_add(t));
        Self([
            band(rg, tolerance.rg),
            band(gb, tolerance.gb),
            band(br, tolerance.br),
        ])
    }

    fn matches(&self, px: Rgb8) -> bool {
        px.channel_diffs()
            .iter()
            .zip(self.0.iter())
            .all(|(&d, &(low, high))| d > low && d < high)
    }
}

/// Keep the pixels whose hue is close to `target` and desaturate the rest.
///
/// Matching pixels are copied untouched and flagged in the returned mask; every
/// other pixel is replaced by its luma gray.
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `target` - The reference color, packed as `0xAARRGGBB`. Alpha is ignored.
/// * `tolerance` - Band half-widths for the three channel differences.
///
/// # Returns
///
/// The filtered image and a mask of the same size marking preserved pixels.
///
/// # Example
///
/// ```
/// use rasterfx_image::{Image, ImageSize, PackedArgb};
/// use rasterfx_imgproc::color::{preserve_color, ColorTolerance};
///
/// let image = Image::<u8, 3>::new(
///     ImageSize { width: 2, height: 1 },
///     vec![255, 0, 0, 0, 0, 255],
/// ).unwrap();
///
/// let (out, mask) =
///     preserve_color(&image, PackedArgb(0xFFFF_0000), ColorTolerance::uniform(10)).unwrap();
///
/// assert_eq!(mask.as_slice(), &[true, false]);
/// assert_eq!(out.as_slice(), &[255, 0, 0, 29, 29, 29]);
/// ```
pub fn preserve_color(
    src: &Image<u8, 3>,
    target: PackedArgb,
    tolerance: ColorTolerance,
) -> Result<(Image<u8, 3>, ColorMask), ImageError> {
    let mut mask = ColorMask::new(src.size());
    let dst = preserve_color_into(src, &mut mask, target, tolerance)?;
    Ok((dst, mask))
}

/// Same as [`preserve_color`], writing the mask into a caller-owned [`ColorMask`].
///
/// The mask is cleared before classification, so no cell keeps a value from a
/// previous call.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if the mask size differs from the image size.
pub fn preserve_color_into(
    src: &Image<u8, 3>,
    mask: &mut ColorMask,
    target: PackedArgb,
    tolerance: ColorTolerance,
) -> Result<Image<u8, 3>, ImageError> {
    if src.size() != mask.size() {
        return Err(ImageError::InvalidImageSize(
            mask.width(),
            mask.height(),
            src.width(),
            src.height(),
        ));
    }

    let bands = HueBands::new(target.rgb(), tolerance);
    let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0)?;

    mask.clear();
    dst.as_slice_mut()
        .chunks_exact_mut(3)
        .zip(src.as_slice().chunks_exact(3))
        .zip(mask.as_slice_mut().iter_mut())
        .for_each(|((dst_pixel, src_pixel), matched)| {
            let px = Rgb8::from_slice(src_pixel);
            if bands.matches(px) {
                *matched = true;
                px.write_to(dst_pixel);
            } else {
                Rgb8::gray(luma(px)).write_to(dst_pixel);
            }
        });

    debug!(
        "preserve_color: kept {} of {} pixels near {:#010x}",
        mask.count(),
        src.size().area(),
        target.0
    );

    Ok(dst)
}
