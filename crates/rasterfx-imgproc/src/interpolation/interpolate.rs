use super::bilinear::bilinear_interpolation;
use super::nearest::nearest_neighbor_interpolation;
use rasterfx_image::{Image, ImageDtype};

/// Interpolation mode for the resize operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Nearest neighbor interpolation
    Nearest,
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The input image container with shape (height, width, C).
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// Coordinates outside the image are clamped to the border pixels. An empty
/// image has nothing to sample and yields zeros.
///
/// # Returns
///
/// The interpolated values of every channel.
///
/// # Example
///
/// ```
/// use rasterfx_image::{Image, ImageSize};
/// use rasterfx_imgproc::interpolation::{interpolate_pixel, InterpolationMode};
///
/// let image = Image::<u8, 1>::new(ImageSize { width: 2, height: 1 }, vec![0, 100]).unwrap();
///
/// let px = interpolate_pixel(&image, 0.25, 0.0, InterpolationMode::Bilinear);
/// assert_eq!(px, [25.0]);
/// ```
pub fn interpolate_pixel<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
    interpolation: InterpolationMode,
) -> [f32; C] {
    if image.is_empty() {
        return [0.0; C];
    }

    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v),
        InterpolationMode::Nearest => nearest_neighbor_interpolation(image, u, v),
    }
}
