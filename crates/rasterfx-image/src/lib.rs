#![deny(missing_docs)]
//! Image types for in-memory RGB pixel buffers.

/// image representation for raster transforms.
pub mod image;

/// pixel and packed color types.
pub mod color;

/// Error types for the image module.
pub mod error;

/// boolean per-pixel masks.
pub mod mask;

pub use crate::color::{PackedArgb, Rgb8};
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageDtype, ImageSize, Rgb8Image, Rgba8Image};
pub use crate::mask::ColorMask;
