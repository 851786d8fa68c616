//! Pixel interpolation methods for image resampling.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: Fastest, uses nearest pixel value (no interpolation)
//! - **Bilinear**: Smooth linear interpolation between adjacent pixels
//!
//! Used by [`crate::resize`].

mod bilinear;
mod interpolate;
mod nearest;

pub use interpolate::{interpolate_pixel, InterpolationMode};
