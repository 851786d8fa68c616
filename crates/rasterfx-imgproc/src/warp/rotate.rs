use log::debug;
use rasterfx_image::{Image, ImageError};

/// Rotate an image clockwise by `angle` degrees around its center.
///
/// The output has the same size as the input and starts black. Every output
/// pixel `(i, j)` is mapped back into the source with the inverse rotation
/// around `(width / 2, height / 2)` (integer division); the source coordinate
/// is truncated toward zero and copied when `0 <= sx < width` and
/// `0 <= sy < height`. Pixels that fall outside stay black.
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `angle` - The clockwise rotation in degrees.
///
/// # Example
///
/// ```
/// use rasterfx_image::{Image, ImageSize};
/// use rasterfx_imgproc::warp::rotate;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize { width: 2, height: 1 },
///     vec![1, 1, 1, 2, 2, 2],
/// ).unwrap();
///
/// let rotated = rotate(&image, 0.0).unwrap();
/// assert_eq!(rotated, image);
/// ```
pub fn rotate(src: &Image<u8, 3>, angle: f64) -> Result<Image<u8, 3>, ImageError> {
    let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0)?;
    if src.is_empty() {
        return Ok(dst);
    }

    // negate so that a positive angle turns clockwise with y pointing down
    let theta = (-angle).to_radians();
    let (sin, cos) = theta.sin_cos();

    let cx = (src.width() / 2) as f64;
    let cy = (src.height() / 2) as f64;

    debug!(
        "rotate: {} by {angle} degrees around ({cx}, {cy})",
        src.size()
    );

    for j in 0..dst.height() {
        for i in 0..dst.width() {
            let a = i as f64 - cx;
            let b = j as f64 - cy;
            let sx = (a * cos - b * sin + cx) as i64;
            let sy = (a * sin + b * cos + cy) as i64;

            if src.contains(sx, sy) {
                dst.copy_pixel_from(i, j, src, sx as usize, sy as usize)?;
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
            .map(|k| Rgb8::new(k as u8, (k * 3) as u8, 255 - k as u8))
            .collect();
        Image::from_pixels(ImageSize { width, height }, &pixels)
    }

    #[test]
    fn rotate_zero_is_identity() -> Result<(), ImageError> {
        let image = numbered(5, 4)?;
        assert_eq!(super::rotate(&image, 0.0)?, image);
        Ok(())
    }

    #[test]
    fn rotate_180_keeps_square_covered() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val([3, 3].into(), 200)?;
        let rotated = super::rotate(&image, 180.0)?;

        // every inverse-mapped coordinate of a centered square stays inside
        assert_eq!(rotated, image);
        Ok(())
    }

    #[test]
    fn rotate_90_clockwise() -> Result<(), ImageError> {
        // 3x3 so the center sits on a pixel
        let image = numbered(3, 3)?;
        let rotated = super::rotate(&image, 90.0)?;

        assert_eq!(rotated.rgb(1, 1)?, image.rgb(1, 1)?);
        // the right neighbour of the center comes from the one above it
        assert_eq!(rotated.rgb(2, 1)?, image.rgb(1, 0)?);
        // the one below comes from the right
        assert_eq!(rotated.rgb(1, 2)?, image.rgb(2, 1)?);
        Ok(())
    }

    #[test]
    fn rotate_out_of_range_is_black() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val([8, 2].into(), 200)?;
        let rotated = super::rotate(&image, 90.0)?;

        assert_eq!(rotated.size(), image.size());
        // the far ends of a wide strip rotate outside the source
        assert_eq!(rotated.rgb(0, 0)?, Rgb8::BLACK);
        assert_eq!(rotated.rgb(7, 1)?, Rgb8::BLACK);
        assert_eq!(rotated.rgb(4, 1)?, Rgb8::gray(200));
        Ok(())
    }

    #[test]
    fn rotate_empty() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new([0, 0].into(), vec![])?;
        assert!(super::rotate(&image, 33.0)?.is_empty());
        Ok(())
    }
}
