use rasterfx_image::{Image, ImageError, Rgb8};

use super::kernels;
use crate::color::luma;

/// Detect edges with the Sobel gradient magnitude.
///
/// The luma of every pixel is convolved with the 3x3 Sobel kernels, borders
/// are handled by replicating the closest edge pixel, and the magnitude
/// `sqrt(gx^2 + gy^2)` is rounded, clamped to 255 and written to all three
/// channels.
///
/// # Arguments
///
/// * `src` - The input RGB image.
///
/// # Returns
///
/// A gray image of the same size, bright where the intensity changes.
///
/// # Example
///
/// ```
/// use rasterfx_image::{Image, ImageSize};
/// use rasterfx_imgproc::filter::detect_edges;
///
/// let flat = Image::<u8, 3>::from_size_val(ImageSize { width: 4, height: 4 }, 90).unwrap();
///
/// let edges = detect_edges(&flat).unwrap();
/// assert!(edges.as_slice().iter().all(|&v| v == 0));
/// ```
pub fn detect_edges(src: &Image<u8, 3>) -> Result<Image<u8, 3>, ImageError> {
    let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0)?;
    if src.is_empty() {
        return Ok(dst);
    }

    let (cols, rows) = (src.cols(), src.rows());
    let gray = src.pixels().map(|px| luma(px) as i32).collect::<Vec<_>>();
    let (kernel_x, kernel_y) = kernels::sobel_kernel_3x3();

    // replicate the border by clamping the neighbour coordinates
    let at = |x: usize, y: usize, dx: usize, dy: usize| {
        let nx = (x + dx).saturating_sub(1).min(cols - 1);
        let ny = (y + dy).saturating_sub(1).min(rows - 1);
        gray[ny * cols + nx]
    };

    dst.as_slice_mut()
        .chunks_exact_mut(3 * cols)
        .enumerate()
        .for_each(|(y, row)| {
            row.chunks_exact_mut(3).enumerate().for_each(|(x, dst_pixel)| {
                let (mut gx, mut gy) = (0i32, 0i32);
                for dy in 0..3 {
                    for dx in 0..3 {
                        let v = at(x, y, dx, dy);
                        gx += kernel_x[dy][dx] * v;
                        gy += kernel_y[dy][dx] * v;
                    }
                }
                let magnitude = ((gx * gx + gy * gy) as f64).sqrt().round();
                Rgb8::gray(magnitude.min(255.0) as u8).write_to(dst_pixel);
            });
        });

    Ok(dst)
}
