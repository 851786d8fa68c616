use log::debug;
use rasterfx_image::{Image, ImageError};

use crate::core::copy;

/// Twist an image around its center by an angle that grows with the radius.
///
/// A pixel at distance `r` from the center `(width / 2.0, height / 2.0)`
/// samples the source at the same distance, rotated by `degree * r` radians.
/// The output starts as a copy of the source, and the sampled pixel is only
/// written when its truncated coordinate satisfies `0 < nx < width` and
/// `0 < ny < height`. Row and column zero of the source are never sampled,
/// unlike [`rotate`](super::rotate) which accepts coordinate zero.
///
/// The center is not rounded to a pixel: on odd sizes it sits half a pixel
/// right of (and below) the integer center `width / 2` that
/// [`rotate`](super::rotate) uses.
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `degree` - Twist in radians per pixel of radius. Zero leaves the image as is.
///
/// # Example
///
/// ```
/// use rasterfx_image::{Image, ImageSize};
/// use rasterfx_imgproc::warp::swirl;
///
/// let image = Image::<u8, 3>::from_size_val(ImageSize { width: 4, height: 4 }, 9).unwrap();
///
/// let swirled = swirl(&image, 0.05).unwrap();
/// assert_eq!(swirled, image);
/// ```
pub fn swirl(src: &Image<u8, 3>, degree: f64) -> Result<Image<u8, 3>, ImageError> {
    let mut dst = copy(src);

    let mid_x = src.width() as f64 / 2.0;
    let mid_y = src.height() as f64 / 2.0;

    debug!(
        "swirl: {} with twist {degree} around ({mid_x}, {mid_y})",
        src.size()
    );

    for y in 0..src.height() {
        for x in 0..src.width() {
            let dx = x as f64 - mid_x;
            let dy = y as f64 - mid_y;
            let radius = dx.hypot(dy);

            // r * cos(theta + phi) expanded with theta = atan2(dy, dx)
            let (sin, cos) = (degree * radius).sin_cos();
            let nx = (mid_x + dx * cos - dy * sin) as i64;
            let ny = (mid_y + dx * sin + dy * cos) as i64;

            if nx > 0 && ny > 0 && src.contains(nx, ny) {
                dst.copy_pixel_from(x, y, src, nx as usize, ny as usize)?;
            }
        }
    }

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use rasterfx_image::{Image, ImageError, ImageSize, Rgb8};

    fn numbered(width: usize, height: usize) -> Result<Image<u8, 3>, ImageError> {
        let pixels: Vec<Rgb8> = (0..width * height)
            .map(|k| Rgb8::new(k as u8, (k / 7) as u8, 100))
            .collect();
        Image::from_pixels(ImageSize { width, height }, &pixels)
    }

    #[test]
    fn swirl_zero_is_identity() -> Result<(), ImageError> {
        for (w, h) in [(1, 1), (4, 4), (5, 3), (9, 6)] {
            let image = numbered(w, h)?;
            assert_eq!(super::swirl(&image, 0.0)?, image);
        }
        Ok(())
    }

    #[test]
    fn swirl_keeps_size_and_palette() -> Result<(), ImageError> {
        let image = numbered(9, 7)?;
        let swirled = super::swirl(&image, 0.3)?;

        assert_eq!(swirled.size(), image.size());
        // pixels are only moved around, never synthesized
        for px in swirled.pixels() {
            assert!(image.pixels().any(|p| p == px));
        }
        assert_ne!(swirled, image);
        Ok(())
    }

    #[test]
    fn swirl_never_samples_row_or_column_zero() -> Result<(), ImageError> {
        let mut image = Image::<u8, 3>::from_size_val([6, 6].into(), 50)?;
        for i in 0..6 {
            image.set_rgb(i, 0, Rgb8::new(255, 0, 0))?;
            image.set_rgb(0, i, Rgb8::new(255, 0, 0))?;
        }

        let swirled = super::swirl(&image, 0.8)?;

        // red can only survive where it already was
        for y in 1..6 {
            for x in 1..6 {
                assert_eq!(swirled.rgb(x, y)?, Rgb8::gray(50));
            }
        }
        Ok(())
    }

    #[test]
    fn swirl_center_is_not_rounded() -> Result<(), ImageError> {
        // around (2.5, 2.5) pixel (4, 2) maps back onto itself for both
        // twists; an integer center (2, 2) would pull in (3, 2) and (3, 3)
        let image = numbered(5, 5)?;

        for degree in [0.2, 0.3] {
            let swirled = super::swirl(&image, degree)?;
            assert_eq!(swirled.rgb(4, 2)?, image.rgb(4, 2)?, "degree {degree}");
        }
        Ok(())
    }

    #[test]
    fn swirl_empty() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new([0, 5].into(), vec![])?;
        assert_eq!(super::swirl(&image, 1.0)?, image);
        Ok(())
    }
}
