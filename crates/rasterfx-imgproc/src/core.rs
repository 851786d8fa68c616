use rasterfx_image::{Image, ImageError};

use crate::parallel;

/// Duplicate an RGB image into a fresh allocation.
///
/// Every transform that starts from the source content (blur, swirl) builds
/// its output with this, so the source is never written to.
///
/// # Example
///
/// ```
/// use rasterfx_image::{Image, ImageSize};
/// use rasterfx_imgproc::core::copy;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize { width: 1, height: 1 },
///     vec![1, 2, 3],
/// ).unwrap();
///
/// let mut dup = copy(&image);
/// dup.as_slice_mut()[0] = 9;
///
/// assert_eq!(image.as_slice(), &[1, 2, 3]);
/// ```
pub fn copy(src: &Image<u8, 3>) -> Image<u8, 3> {
    src.clone()
}

/// Copy an RGBA image into a new RGB image, dropping the alpha channel.
///
/// # Arguments
///
/// * `src` - The input RGBA image.
///
/// # Returns
///
/// The RGB image of the same size. The color channels are copied untouched.
pub fn rgb_from_rgba(src: &Image<u8, 4>) -> Result<Image<u8, 3>, ImageError> {
    let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0)?;

    // just drop the alpha channel in the last index
    parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        dst_pixel.copy_from_slice(&src_pixel[..3]);
    });

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use rasterfx_image::{Image, ImageError, ImageSize};

    #[test]
    fn copy_is_distinct() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![10, 20, 30, 40, 50, 60],
        )?;

        let mut dup = super::copy(&image);
        assert_eq!(dup, image);

        dup.as_slice_mut().fill(0);
        assert_eq!(image.as_slice(), &[10, 20, 30, 40, 50, 60]);

        Ok(())
    }

    #[test]
    fn rgb_from_rgba_drops_alpha() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![1, 2, 3, 255, 4, 5, 6, 0],
        )?;

        let rgb = super::rgb_from_rgba(&image)?;
        assert_eq!(rgb.size(), image.size());
        assert_eq!(rgb.as_slice(), &[1, 2, 3, 4, 5, 6]);

        Ok(())
    }
}
