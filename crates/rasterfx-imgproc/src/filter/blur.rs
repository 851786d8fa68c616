use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rasterfx_image::{Image, ImageError};

use crate::core::copy;

/// Blur an image by random local displacement.
///
/// For every output pixel `(i, j)`, in row-major order, two offsets `dy` and
/// `dx` are drawn uniformly from `[0, offset)`. When `(i + dx, j + dy)` lies
/// inside the image that source pixel is copied to `(i, j)`; otherwise the
/// pixel keeps its original value. No averaging takes place.
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `offset` - Exclusive upper bound of the displacement along each axis.
/// * `rng` - The random source. Pass a seeded generator for reproducible output.
///
/// # Errors
///
/// Returns [`ImageError::InvalidBlurOffset`] when `offset` is zero.
///
/// # Example
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use rasterfx_image::{Image, ImageSize};
/// use rasterfx_imgproc::filter::blur;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize { width: 3, height: 1 },
///     vec![0, 0, 0, 100, 100, 100, 200, 200, 200],
/// ).unwrap();
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let blurred = blur(&image, 2, &mut rng).unwrap();
///
/// assert_eq!(blurred.size(), image.size());
/// ```
pub fn blur<R: Rng + ?Sized>(
    src: &Image<u8, 3>,
    offset: usize,
    rng: &mut R,
) -> Result<Image<u8, 3>, ImageError> {
    if offset == 0 {
        return Err(ImageError::InvalidBlurOffset(offset));
    }

    debug!("blur: {} with offset {offset}", src.size());

    let mut dst = copy(src);

    for j in 0..src.height() {
        for i in 0..src.width() {
            let dy = rng.random_range(0..offset);
            let dx = rng.random_range(0..offset);

            let (sx, sy) = (i.saturating_add(dx), j.saturating_add(dy));
            if sx < src.width() && sy < src.height() {
                dst.copy_pixel_from(i, j, src, sx, sy)?;
            }
        }
    }

    Ok(dst)
}

/// Same as [`blur`], drawing the displacements from a [`StdRng`] seeded with `seed`.
///
/// Two calls with the same image, offset and seed return identical images.
pub fn blur_with_seed(
    src: &Image<u8, 3>,
    offset: usize,
    seed: u64,
) -> Result<Image<u8, 3>, ImageError> {
    let mut rng = StdRng::seed_from_u64(seed);
    blur(src, offset, &mut rng)
}

#[cfg(test)]
mod tests {
    use rasterfx_image::{Image, ImageError, ImageSize, Rgb8};

    fn numbered(width: usize, height: usize) -> Result<Image<u8, 3>, ImageError> {
        let pixels: Vec<Rgb8> = (0..width * height)
            .map(|k| Rgb8::new((k % width) as u8, (k / width) as u8, 0))
            .collect();
        Image::from_pixels(ImageSize { width, height }, &pixels)
    }

    #[test]
    fn blur_rejects_zero_offset() -> Result<(), ImageError> {
        let image = numbered(2, 2)?;
        assert_eq!(
            super::blur_with_seed(&image, 0, 1),
            Err(ImageError::InvalidBlurOffset(0))
        );
        Ok(())
    }

    #[test]
    fn blur_offset_one_is_identity() -> Result<(), ImageError> {
        let image = numbered(5, 4)?;
        assert_eq!(super::blur_with_seed(&image, 1, 42)?, image);
        Ok(())
    }

    #[test]
    fn blur_same_seed_same_output() -> Result<(), ImageError> {
        let image = numbered(16, 12)?;
        let a = super::blur_with_seed(&image, 4, 1234)?;
        let b = super::blur_with_seed(&image, 4, 1234)?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn blur_samples_within_window() -> Result<(), ImageError> {
        let offset = 3;
        let image = numbered(10, 8)?;
        let blurred = super::blur_with_seed(&image, offset, 99)?;

        // each pixel encodes its own coordinate, so the sample position is visible
        for y in 0..image.height() {
            for x in 0..image.width() {
                let px = blurred.rgb(x, y)?;
                let (sx, sy) = (px.r as usize, px.g as usize);
                assert!(sx >= x && sx < x + offset, "x {x} sampled {sx}");
                assert!(sy >= y && sy < y + offset, "y {y} sampled {sy}");
            }
        }

        // the bottom-right pixel has nowhere else to sample from
        assert_eq!(blurred.rgb(9, 7)?, image.rgb(9, 7)?);
        Ok(())
    }

    #[test]
    fn blur_moves_pixels() -> Result<(), ImageError> {
        let image = numbered(32, 32)?;
        let blurred = super::blur_with_seed(&image, 5, 7)?;
        assert_ne!(blurred, image);
        Ok(())
    }

    #[test]
    fn blur_with_dyn_rng() -> Result<(), ImageError> {
        use rand::{rngs::StdRng, RngCore, SeedableRng};

        let image = numbered(6, 5)?;
        let mut rng: Box<dyn RngCore> = Box::new(StdRng::seed_from_u64(9));
        let a = super::blur(&image, 3, &mut *rng)?;
        assert_eq!(a, super::blur_with_seed(&image, 3, 9)?);
        Ok(())
    }

    #[test]
    fn blur_custom_rng() -> Result<(), ImageError> {
        use rand::{rngs::StdRng, SeedableRng};

        let image = numbered(4, 4)?;
        let mut rng = StdRng::seed_from_u64(5);
        let a = super::blur(&image, 2, &mut rng)?;
        let b = super::blur_with_seed(&image, 2, 5)?;
        assert_eq!(a, b);
        Ok(())
    }
}
