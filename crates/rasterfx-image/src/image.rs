use crate::color::Rgb8;
use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use rasterfx_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by this size.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Whether the size holds no pixel at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Trait for image data types that can round-trip through `f32` arithmetic.
pub trait ImageDtype: Copy + Default + Into<f32> + Send + Sync {
    /// Convert a f32 value to the image data type.
    fn from_f32(x: f32) -> Self;
}

impl ImageDtype for f32 {
    fn from_f32(x: f32) -> Self {
        x
    }
}

impl ImageDtype for u8 {
    fn from_f32(x: f32) -> Self {
        x.round().clamp(0.0, 255.0) as u8
    }
}

/// Represents an image with pixel data.
///
/// The pixels are stored row-major and interleaved, i.e. with shape (H, W, C),
/// where H is the height of the image, W the width and C the number of channels.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

/// An 8-bit RGB image, the pixel buffer every transform works on.
pub type Rgb8Image = Image<u8, 3>;

/// An 8-bit RGBA image. The alpha channel is carried through untouched.
pub type Rgba8Image = Image<u8, 4>;

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Returns
    ///
    /// A new image with the given pixel data.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rasterfx_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        // check if the data length matches the image size
        if data.len() != size.area() * CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.area() * CHANNELS,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and default pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `val` - The default value of the pixel data.
    ///
    /// # Examples
    ///
    /// ```
    /// use rasterfx_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///     height: 20,
    ///   },
    ///   0u8,
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.area() * CHANNELS];
        Image::new(size, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Whether the image holds no pixel at all.
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Get the raw interleaved pixel data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the raw interleaved pixel data mutably.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return its pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Whether the signed coordinate `(x, y)` lies inside the image.
    ///
    /// Every transform checks source coordinates with this before reading.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width() as u64 && (y as u64) < self.height() as u64
    }

    /// Get an element by its `[y, x, c]` index, or `None` when out of bounds.
    pub fn get(&self, index: [usize; 3]) -> Option<&T> {
        let [y, x, c] = index;
        if x >= self.width() || y >= self.height() || c >= CHANNELS {
            return None;
        }
        self.data.get((y * self.width() + x) * CHANNELS + c)
    }

    /// Get the channels of the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] when `(x, y)` is outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Result<&[T], ImageError> {
        let offset = self.pixel_offset(x, y)?;
        Ok(&self.data[offset..offset + CHANNELS])
    }

    /// Get the channels of the pixel at `(x, y)` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] when `(x, y)` is outside the image.
    pub fn pixel_mut(&mut self, x: usize, y: usize) -> Result<&mut [T], ImageError> {
        let offset = self.pixel_offset(x, y)?;
        Ok(&mut self.data[offset..offset + CHANNELS])
    }

    /// Get the value of a single channel of the pixel at `(x, y)`.
    ///
    /// # Arguments
    ///
    /// * `x` - The x-coordinate of the pixel.
    /// * `y` - The y-coordinate of the pixel.
    /// * `ch` - The channel index of the pixel.
    pub fn get_pixel(&self, x: usize, y: usize, ch: usize) -> Result<&T, ImageError> {
        if ch >= CHANNELS {
            return Err(ImageError::ChannelIndexOutOfBounds(ch, CHANNELS));
        }
        Ok(&self.pixel(x, y)?[ch])
    }

    /// Set the value of a single channel of the pixel at `(x, y)`.
    pub fn set_pixel(&mut self, x: usize, y: usize, ch: usize, val: T) -> Result<(), ImageError> {
        if ch >= CHANNELS {
            return Err(ImageError::ChannelIndexOutOfBounds(ch, CHANNELS));
        }
        self.pixel_mut(x, y)?[ch] = val;
        Ok(())
    }

    /// Copy the whole pixel at `(src_x, src_y)` of `src` into `(x, y)` of this image.
    ///
    /// Both coordinates are checked against their own image, so `src` may have
    /// a different size than `self`.
    pub fn copy_pixel_from(
        &mut self,
        x: usize,
        y: usize,
        src: &Image<T, CHANNELS>,
        src_x: usize,
        src_y: usize,
    ) -> Result<(), ImageError>
    where
        T: Copy,
    {
        let pixel = src.pixel(src_x, src_y)?;
        self.pixel_mut(x, y)?.copy_from_slice(pixel);
        Ok(())
    }

    fn pixel_offset(&self, x: usize, y: usize) -> Result<usize, ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }
        Ok((y * self.width() + x) * CHANNELS)
    }
}

impl Image<u8, 3> {
    /// Read the pixel at `(x, y)` as an [`Rgb8`] triple.
    pub fn rgb(&self, x: usize, y: usize) -> Result<Rgb8, ImageError> {
        self.pixel(x, y).map(Rgb8::from_slice)
    }

    /// Write an [`Rgb8`] triple into the pixel at `(x, y)`.
    pub fn set_rgb(&mut self, x: usize, y: usize, rgb: Rgb8) -> Result<(), ImageError> {
        rgb.write_to(self.pixel_mut(x, y)?);
        Ok(())
    }

    /// Build an RGB image from a row-major list of pixels.
    ///
    /// ```
    /// use rasterfx_image::{Image, ImageSize, Rgb8};
    ///
    /// let image = Image::from_pixels(
    ///     ImageSize { width: 2, height: 1 },
    ///     &[Rgb8::new(255, 0, 0), Rgb8::new(0, 0, 255)],
    /// ).unwrap();
    ///
    /// assert_eq!(image.as_slice(), &[255, 0, 0, 0, 0, 255]);
    /// ```
    pub fn from_pixels(size: ImageSize, pixels: &[Rgb8]) -> Result<Self, ImageError> {
        let data = pixels.iter().flat_map(|p| p.to_array()).collect();
        Image::new(size, data)
    }

    /// Iterate over the pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb8> + '_ {
        self.data.chunks_exact(3).map(Rgb8::from_slice)
    }
}
