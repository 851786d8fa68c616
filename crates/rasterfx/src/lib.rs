//! Raster image transforms over in-memory RGB buffers.
//!
//! This crate re-exports the image container ([`image`]) and the transform
//! library ([`imgproc`]) under a single name.
//!
//! ```
//! use rasterfx::image::{Image, ImageSize};
//! use rasterfx::imgproc::{color, enhance, warp};
//!
//! let image = Image::<u8, 3>::from_size_val(ImageSize { width: 8, height: 6 }, 120).unwrap();
//!
//! let gray = color::grayscale(&image).unwrap();
//! let inverted = enhance::invert(&gray).unwrap();
//! let rotated = warp::rotate(&inverted, 90.0).unwrap();
//!
//! assert_eq!(rotated.size(), image.size());
//! ```

#[doc(inline)]
pub use rasterfx_image as image;

#[doc(inline)]
pub use rasterfx_imgproc as imgproc;
