use crate::{error::ImageError, image::ImageSize};

/// A per-pixel boolean mask, stored row-major.
///
/// Every cell starts as `false`.
///
/// # Examples
///
/// ```
/// use rasterfx_image::{ColorMask, ImageSize};
///
/// let mut mask = ColorMask::new(ImageSize { width: 3, height: 2 });
/// mask.set(2, 1, true).unwrap();
///
/// assert_eq!(mask.get(2, 1), Some(true));
/// assert_eq!(mask.get(0, 0), Some(false));
/// assert_eq!(mask.get(3, 0), None);
/// assert_eq!(mask.count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorMask {
    size: ImageSize,
    data: Vec<bool>,
}

impl ColorMask {
    /// Create a mask of the given size with every cell cleared.
    pub fn new(size: ImageSize) -> Self {
        Self {
            size,
            data: vec![false; size.area()],
        }
    }

    /// Get the size of the mask.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the mask.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the mask.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// The value at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.data[y * self.width() + x])
    }

    /// Set the value at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, val: bool) -> Result<(), ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }
        let w = self.width();
        self.data[y * w + x] = val;
        Ok(())
    }

    /// Reset every cell to `false`.
    pub fn clear(&mut self) {
        self.data.fill(false);
    }

    /// Number of cells set to `true`.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// Row-major cell values.
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    /// Row-major cell values, mutably.
    pub fn as_slice_mut(&mut self) -> &mut [bool] {
        &mut self.data
    }
}
