/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when two images (or an image and a mask) do not share a size.
    #[error("Image size ({0}x{1}) does not match the expected size ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a requested output size cannot hold any pixel.
    #[error("Invalid target dimensions {0}x{1}, both must be positive")]
    InvalidDimensions(usize, usize),

    /// Error when the random blur displacement range is empty.
    #[error("Blur offset must be positive, got {0}")]
    InvalidBlurOffset(usize),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel coordinates ({0}, {1}) are out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index ({0}) is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),
}
