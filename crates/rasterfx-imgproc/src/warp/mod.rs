//! Geometric image transformations by inverse mapping.
//!
//! Both warps walk the output grid and look up, for each output pixel, the
//! source pixel it derives from, so the result has no holes:
//!
//! - [`rotate`]: rigid rotation around the image center, black outside the source
//! - [`swirl`]: rotation whose angle grows with the distance to the center
//!
//! # Examples
//!
//! Rotating an image by 45 degrees:
//!
//! ```
//! use rasterfx_image::{Image, ImageSize};
//! use rasterfx_imgproc::warp::rotate;
//!
//! let image = Image::<u8, 3>::from_size_val(ImageSize { width: 16, height: 16 }, 255).unwrap();
//! let rotated = rotate(&image, 45.0).unwrap();
//!
//! // the corners are swung out of the source and left black
//! assert_eq!(rotated.as_slice()[..3], [0, 0, 0]);
//! ```

mod rotate;
mod swirl;

pub use rotate::rotate;
pub use swirl::swirl;
