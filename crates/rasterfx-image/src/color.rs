/// An 8-bit red, green, blue triple.
///
/// Channels are stored as `u8`, so any value built from arithmetic has to be
/// clamped into `[0, 255]` before it lands here (see [`Rgb8::from_i32_clamped`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Black.
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);

    /// Create a triple from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A gray triple where all channels share `v`.
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Create a triple from signed intermediates, saturating each channel to `[0, 255]`.
    pub fn from_i32_clamped(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: r.clamp(0, 255) as u8,
            g: g.clamp(0, 255) as u8,
            b: b.clamp(0, 255) as u8,
        }
    }

    /// Read the first three channels of an interleaved pixel.
    ///
    /// # Panics
    ///
    /// Panics if `pixel` holds fewer than three channels.
    #[inline]
    pub fn from_slice(pixel: &[u8]) -> Self {
        Self {
            r: pixel[0],
            g: pixel[1],
            b: pixel[2],
        }
    }

    /// Write the triple into the first three channels of an interleaved pixel.
    ///
    /// # Panics
    ///
    /// Panics if `pixel` holds fewer than three channels.
    #[inline]
    pub fn write_to(&self, pixel: &mut [u8]) {
        pixel[0] = self.r;
        pixel[1] = self.g;
        pixel[2] = self.b;
    }

    /// The channels as `[r, g, b]`.
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Pairwise channel differences `(r - g, g - b, b - r)`.
    pub fn channel_diffs(&self) -> [i32; 3] {
        let (r, g, b) = (self.r as i32, self.g as i32, self.b as i32);
        [r - g, g - b, b - r]
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(v: [u8; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

/// A color packed into 32 bits as `0xAARRGGBB`.
///
/// Alpha occupies bits 31..24, red 23..16, green 15..8 and blue 7..0.
///
/// # Examples
///
/// ```
/// use rasterfx_image::{PackedArgb, Rgb8};
///
/// let red = PackedArgb(0xFFFF_0000);
/// assert_eq!(red.alpha(), 0xFF);
/// assert_eq!(red.rgb(), Rgb8::new(255, 0, 0));
/// assert_eq!(PackedArgb::from_argb(0xFF, 255, 0, 0), red);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PackedArgb(pub u32);

impl PackedArgb {
    /// Pack four channels into a single word.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Pack an opaque RGB triple.
    pub const fn from_rgb(rgb: Rgb8) -> Self {
        Self::from_argb(0xFF, rgb.r, rgb.g, rgb.b)
    }

    /// Alpha channel, bits 31..24.
    pub const fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel, bits 23..16.
    pub const fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel, bits 15..8.
    pub const fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel, bits 7..0.
    pub const fn blue(&self) -> u8 {
        self.0 as u8
    }

    /// The color channels without alpha.
    pub const fn rgb(&self) -> Rgb8 {
        Rgb8::new(self.red(), self.green(), self.blue())
    }
}

impl From<u32> for PackedArgb {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
