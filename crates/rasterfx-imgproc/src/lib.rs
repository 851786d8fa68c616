#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image basic operations module.
pub mod core;

/// image enhancement module.
pub mod enhance;

/// image filtering module.
pub mod filter;

/// utilities for interpolation.
pub mod interpolation;

/// module containing parallelization utilities.
pub mod parallel;

/// utility functions for resizing images.
pub mod resize;

/// image geometric transformations module.
pub mod warp;
